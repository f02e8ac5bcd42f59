//! Capabilities
//!
//! Typed wrappers share behavior by composition rather than by a type chain:
//! every wrapper implements [`Wrapper`] (access to its backing document), and
//! opts into [`RichTextContent`] and/or [`ChildrenContent`] when the JSON shape
//! of its discriminator carries those fields. The trait bodies are the whole
//! implementation; a wrapper only states where its lists live.
//!
//! Decoding policy differs on purpose:
//!
//! - rich text is decoration, so [`RichTextContent::list_text`] skips runs
//!   that do not decode;
//! - children are structure, so [`ChildrenContent::children`] fails as a
//!   whole if any child does not decode.

use crate::models::rich_text::decode_runs;
use crate::models::{Block, Doc, DocumentError, RichText, Value};

/// Access to the document behind a typed wrapper
pub trait Wrapper {
    fn json(&self) -> &Doc;

    fn json_mut(&mut self) -> &mut Doc;

    /// The `type` discriminator, empty when absent
    fn discriminator(&self) -> String {
        self.json().get_string("type")
    }
}

/// Rich-text list management
pub trait RichTextContent: Wrapper {
    /// Keys from the root document to the rich-text list
    ///
    /// Blocks keep their runs at `doc[type]["text"]`, the default.
    fn text_path(&self) -> Result<Vec<String>, DocumentError> {
        let discriminator = non_empty(self.discriminator())?;
        Ok(vec![discriminator, "text".to_string()])
    }

    /// Decode the runs, skipping entries that are not valid rich text
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::MissingField` if the list itself is absent.
    fn list_text(&self) -> Result<Vec<RichText>, DocumentError> {
        let path = self.text_path()?;
        let items = list_at(self.json(), &path)?;
        Ok(decode_runs(as_docs(items)))
    }

    /// Append runs to the existing list
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::MissingField` if the list does not exist yet.
    fn add_text(&mut self, items: &[RichText]) -> Result<(), DocumentError> {
        let path = self.text_path()?;
        let list = list_at_mut(self.json_mut(), &path)?;
        list.extend(items.iter().map(|run| Value::Doc(run.json().clone())));
        Ok(())
    }
}

/// Nested block management, the list lives at `doc[type]["children"]`
pub trait ChildrenContent: Wrapper {
    /// Decode every child through block assignment
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::MissingField` if the list is absent, or the
    /// first child's assignment error: a single bad child fails the call.
    fn children(&self) -> Result<Vec<Block>, DocumentError> {
        let path = children_path(self.discriminator())?;
        let items = list_at(self.json(), &path)?;
        as_docs(items).into_iter().map(Block::assign).collect()
    }

    /// Append blocks to the existing list
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::MissingField` if the list does not exist yet.
    fn add_children(&mut self, children: Vec<Block>) -> Result<(), DocumentError> {
        let path = children_path(self.discriminator())?;
        let list = list_at_mut(self.json_mut(), &path)?;
        list.extend(children.into_iter().map(|block| Value::Doc(block.into_json())));
        Ok(())
    }
}

fn non_empty(discriminator: String) -> Result<String, DocumentError> {
    if discriminator.is_empty() {
        return Err(DocumentError::missing_field("type"));
    }
    Ok(discriminator)
}

fn children_path(discriminator: String) -> Result<Vec<String>, DocumentError> {
    Ok(vec![non_empty(discriminator)?, "children".to_string()])
}

fn as_docs(items: &[Value]) -> Vec<Doc> {
    items
        .iter()
        .map(|item| item.as_doc().cloned().unwrap_or_default())
        .collect()
}

fn list_at<'a>(doc: &'a Doc, path: &[String]) -> Result<&'a Vec<Value>, DocumentError> {
    let (last, parents) = path
        .split_last()
        .ok_or_else(|| DocumentError::missing_field("type"))?;
    let mut current = doc;
    for key in parents {
        current = current
            .get_doc(key)
            .ok_or_else(|| DocumentError::missing_field(key.clone()))?;
    }
    current
        .get_list(last)
        .ok_or_else(|| DocumentError::missing_field(path.join(".")))
}

fn list_at_mut<'a>(doc: &'a mut Doc, path: &[String]) -> Result<&'a mut Vec<Value>, DocumentError> {
    let (last, parents) = path
        .split_last()
        .ok_or_else(|| DocumentError::missing_field("type"))?;
    let mut current = doc;
    for key in parents {
        current = current
            .get_doc_mut(key)
            .ok_or_else(|| DocumentError::missing_field(key.clone()))?;
    }
    current
        .get_list_mut(last)
        .ok_or_else(|| DocumentError::missing_field(path.join(".")))
}
