//! Blocks
//!
//! A block document carries its discriminator under `type` and its payload
//! under the key of the same name:
//!
//! ```json
//! {"object": "block", "id": "…", "type": "to_do",
//!  "to_do": {"text": [ … ], "children": [ … ], "checked": false}}
//! ```
//!
//! [`Block`] is the closed sum over the block catalog. Each variant holds the
//! wrapper whose capabilities match the payload shape:
//!
//! | discriminator                                   | wrapper          | rich text | children |
//! |-------------------------------------------------|------------------|-----------|----------|
//! | paragraph, heading_1..3                         | `RichTextBlock`  | yes       |          |
//! | bulleted_list_item, numbered_list_item, toggle  | `ChildrenBlock`  | yes       | yes      |
//! | to_do                                           | `ToDoBlock`      | yes       | yes      |
//! | child_page                                      | `ChildPageBlock` |           |          |
//! | unsupported                                     | `CustomBlock`    |           |          |
//!
//! # Examples
//!
//! ```rust
//! use notion_core::models::{Block, ChildrenContent, RichText};
//!
//! let todo = Block::to_do(false, vec![RichText::new("Ship it")], vec![
//!     Block::paragraph(vec![RichText::new("details")]),
//! ]);
//!
//! let decoded = Block::assign(todo.json().clone())?;
//! assert_eq!(decoded, todo);
//! assert_eq!(decoded.as_children().unwrap().children()?.len(), 1);
//! # Ok::<(), notion_core::models::DocumentError>(())
//! ```

use crate::models::capability::{ChildrenContent, RichTextContent, Wrapper};
use crate::models::registry::{self, Catalog};
use crate::models::time::parse_timestamp;
use crate::models::{Doc, DocumentError, ObjectKind, RichText, Value};
use chrono::{DateTime, Utc};
use std::fmt;

/// Block catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    BulletedListItem,
    NumberedListItem,
    ToDo,
    Toggle,
    ChildPage,
    Unsupported,
}

impl Catalog for BlockType {
    const KIND: &'static str = "block";
    const ALL: &'static [Self] = &[
        Self::Paragraph,
        Self::Heading1,
        Self::Heading2,
        Self::Heading3,
        Self::BulletedListItem,
        Self::NumberedListItem,
        Self::ToDo,
        Self::Toggle,
        Self::ChildPage,
        Self::Unsupported,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Heading1 => "heading_1",
            Self::Heading2 => "heading_2",
            Self::Heading3 => "heading_3",
            Self::BulletedListItem => "bulleted_list_item",
            Self::NumberedListItem => "numbered_list_item",
            Self::ToDo => "to_do",
            Self::Toggle => "toggle",
            Self::ChildPage => "child_page",
            Self::Unsupported => "unsupported",
        }
    }
}

impl BlockType {
    /// Whether the payload carries a `text` list
    pub fn has_rich_text(&self) -> bool {
        !matches!(self, Self::ChildPage | Self::Unsupported)
    }

    /// Whether the payload carries a `children` list
    pub fn has_children(&self) -> bool {
        matches!(
            self,
            Self::BulletedListItem | Self::NumberedListItem | Self::ToDo | Self::Toggle
        )
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields common to every block
#[derive(Debug, Clone, PartialEq)]
pub struct CustomBlock {
    id: String,
    json: Doc,
}

impl CustomBlock {
    /// Wrap a block document without checking its discriminator
    pub fn from_doc(json: Doc) -> Self {
        Self {
            id: json.get_string("id"),
            json,
        }
    }

    fn with_payload(kind: BlockType, payload: Doc) -> Self {
        let json = Doc::new()
            .with("object", ObjectKind::Block.as_str())
            .with("type", kind.as_str())
            .with(kind.as_str(), payload);
        Self {
            id: String::new(),
            json,
        }
    }

    pub fn object(&self) -> &'static str {
        ObjectKind::Block.as_str()
    }

    /// Empty until the block has been persisted
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_time(&self) -> String {
        self.json.get_string("created_time")
    }

    pub fn last_edited_time(&self) -> String {
        self.json.get_string("last_edited_time")
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_time()).ok()
    }

    pub fn last_edited_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.last_edited_time()).ok()
    }

    pub fn has_children(&self) -> bool {
        self.json.get_bool("has_children")
    }

    pub fn into_json(self) -> Doc {
        self.json
    }
}

impl Wrapper for CustomBlock {
    fn json(&self) -> &Doc {
        &self.json
    }

    fn json_mut(&mut self) -> &mut Doc {
        &mut self.json
    }
}

/// Block with a rich-text list
#[derive(Debug, Clone, PartialEq)]
pub struct RichTextBlock {
    base: CustomBlock,
}

impl RichTextBlock {
    fn new(kind: BlockType, text: &[RichText]) -> Self {
        let payload = Doc::new().with("text", Vec::<Value>::new());
        let mut block = Self {
            base: CustomBlock::with_payload(kind, payload),
        };
        if let Err(e) = block.add_text(text) {
            tracing::warn!("Failed to seed {} text: {}", kind, e);
        }
        block
    }

    pub fn base(&self) -> &CustomBlock {
        &self.base
    }
}

impl Wrapper for RichTextBlock {
    fn json(&self) -> &Doc {
        self.base.json()
    }

    fn json_mut(&mut self) -> &mut Doc {
        self.base.json_mut()
    }
}

impl RichTextContent for RichTextBlock {}

/// Block with a rich-text list and nested children
#[derive(Debug, Clone, PartialEq)]
pub struct ChildrenBlock {
    inner: RichTextBlock,
}

impl ChildrenBlock {
    fn new(kind: BlockType, text: &[RichText], children: Vec<Block>) -> Self {
        let mut inner = RichTextBlock::new(kind, text);
        if let Some(payload) = inner.json_mut().get_doc_mut(kind.as_str()) {
            payload.insert("children", Vec::<Value>::new());
        }
        let mut block = Self { inner };
        if let Err(e) = block.add_children(children) {
            tracing::warn!("Failed to seed {} children: {}", kind, e);
        }
        block
    }

    pub fn base(&self) -> &CustomBlock {
        self.inner.base()
    }
}

impl Wrapper for ChildrenBlock {
    fn json(&self) -> &Doc {
        self.inner.json()
    }

    fn json_mut(&mut self) -> &mut Doc {
        self.inner.json_mut()
    }
}

impl RichTextContent for ChildrenBlock {}

impl ChildrenContent for ChildrenBlock {}

/// `to_do` block: children block plus a checked flag
#[derive(Debug, Clone, PartialEq)]
pub struct ToDoBlock {
    inner: ChildrenBlock,
}

impl ToDoBlock {
    pub fn base(&self) -> &CustomBlock {
        self.inner.base()
    }

    pub fn is_checked(&self) -> bool {
        self.json()
            .get_doc(BlockType::ToDo.as_str())
            .map(|payload| payload.get_bool("checked"))
            .unwrap_or(false)
    }

    pub fn set_checked(&mut self, checked: bool) {
        if let Some(payload) = self.json_mut().get_doc_mut(BlockType::ToDo.as_str()) {
            payload.insert("checked", checked);
        }
    }
}

impl Wrapper for ToDoBlock {
    fn json(&self) -> &Doc {
        self.inner.json()
    }

    fn json_mut(&mut self) -> &mut Doc {
        self.inner.json_mut()
    }
}

impl RichTextContent for ToDoBlock {}

impl ChildrenContent for ToDoBlock {}

/// `child_page` block, a reference to a nested page by title
#[derive(Debug, Clone, PartialEq)]
pub struct ChildPageBlock {
    base: CustomBlock,
}

impl ChildPageBlock {
    pub fn base(&self) -> &CustomBlock {
        &self.base
    }

    pub fn title(&self) -> String {
        self.json()
            .get_doc(BlockType::ChildPage.as_str())
            .map(|payload| payload.get_string("title"))
            .unwrap_or_default()
    }
}

impl Wrapper for ChildPageBlock {
    fn json(&self) -> &Doc {
        self.base.json()
    }

    fn json_mut(&mut self) -> &mut Doc {
        self.base.json_mut()
    }
}

/// Every block the catalog knows
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(RichTextBlock),
    Heading1(RichTextBlock),
    Heading2(RichTextBlock),
    Heading3(RichTextBlock),
    BulletedListItem(ChildrenBlock),
    NumberedListItem(ChildrenBlock),
    ToDo(ToDoBlock),
    Toggle(ChildrenBlock),
    ChildPage(ChildPageBlock),
    Unsupported(CustomBlock),
}

impl Block {
    /// Promote a raw document into its typed block
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::UnknownVariant` if `type` is missing or not a
    /// block discriminator. No partial block is returned.
    pub fn assign(json: Doc) -> Result<Self, DocumentError> {
        let kind = registry::resolve::<BlockType>(&json)?;
        let base = CustomBlock::from_doc(json);
        let block = match kind {
            BlockType::Paragraph => Block::Paragraph(RichTextBlock { base }),
            BlockType::Heading1 => Block::Heading1(RichTextBlock { base }),
            BlockType::Heading2 => Block::Heading2(RichTextBlock { base }),
            BlockType::Heading3 => Block::Heading3(RichTextBlock { base }),
            BlockType::BulletedListItem => Block::BulletedListItem(ChildrenBlock {
                inner: RichTextBlock { base },
            }),
            BlockType::NumberedListItem => Block::NumberedListItem(ChildrenBlock {
                inner: RichTextBlock { base },
            }),
            BlockType::ToDo => Block::ToDo(ToDoBlock {
                inner: ChildrenBlock {
                    inner: RichTextBlock { base },
                },
            }),
            BlockType::Toggle => Block::Toggle(ChildrenBlock {
                inner: RichTextBlock { base },
            }),
            BlockType::ChildPage => Block::ChildPage(ChildPageBlock { base }),
            BlockType::Unsupported => Block::Unsupported(base),
        };
        Ok(block)
    }

    pub fn paragraph(text: Vec<RichText>) -> Self {
        Block::Paragraph(RichTextBlock::new(BlockType::Paragraph, &text))
    }

    pub fn heading_1(text: Vec<RichText>) -> Self {
        Block::Heading1(RichTextBlock::new(BlockType::Heading1, &text))
    }

    pub fn heading_2(text: Vec<RichText>) -> Self {
        Block::Heading2(RichTextBlock::new(BlockType::Heading2, &text))
    }

    pub fn heading_3(text: Vec<RichText>) -> Self {
        Block::Heading3(RichTextBlock::new(BlockType::Heading3, &text))
    }

    pub fn bulleted_list_item(text: Vec<RichText>, children: Vec<Block>) -> Self {
        Block::BulletedListItem(ChildrenBlock::new(
            BlockType::BulletedListItem,
            &text,
            children,
        ))
    }

    pub fn numbered_list_item(text: Vec<RichText>, children: Vec<Block>) -> Self {
        Block::NumberedListItem(ChildrenBlock::new(
            BlockType::NumberedListItem,
            &text,
            children,
        ))
    }

    pub fn to_do(checked: bool, text: Vec<RichText>, children: Vec<Block>) -> Self {
        let mut block = ToDoBlock {
            inner: ChildrenBlock::new(BlockType::ToDo, &text, children),
        };
        block.set_checked(checked);
        Block::ToDo(block)
    }

    pub fn toggle(text: Vec<RichText>, children: Vec<Block>) -> Self {
        Block::Toggle(ChildrenBlock::new(BlockType::Toggle, &text, children))
    }

    pub fn child_page(title: impl Into<String>) -> Self {
        let payload = Doc::new().with("title", title.into());
        Block::ChildPage(ChildPageBlock {
            base: CustomBlock::with_payload(BlockType::ChildPage, payload),
        })
    }

    /// Catalog entry of this block
    pub fn block_type(&self) -> BlockType {
        match self {
            Block::Paragraph(_) => BlockType::Paragraph,
            Block::Heading1(_) => BlockType::Heading1,
            Block::Heading2(_) => BlockType::Heading2,
            Block::Heading3(_) => BlockType::Heading3,
            Block::BulletedListItem(_) => BlockType::BulletedListItem,
            Block::NumberedListItem(_) => BlockType::NumberedListItem,
            Block::ToDo(_) => BlockType::ToDo,
            Block::Toggle(_) => BlockType::Toggle,
            Block::ChildPage(_) => BlockType::ChildPage,
            Block::Unsupported(_) => BlockType::Unsupported,
        }
    }

    /// Fields common to every block
    pub fn base(&self) -> &CustomBlock {
        match self {
            Block::Paragraph(b) | Block::Heading1(b) | Block::Heading2(b) | Block::Heading3(b) => {
                b.base()
            }
            Block::BulletedListItem(b) | Block::NumberedListItem(b) | Block::Toggle(b) => b.base(),
            Block::ToDo(b) => b.base(),
            Block::ChildPage(b) => b.base(),
            Block::Unsupported(b) => b,
        }
    }

    pub fn id(&self) -> &str {
        self.base().id()
    }

    pub fn object(&self) -> &'static str {
        ObjectKind::Block.as_str()
    }

    pub fn has_children(&self) -> bool {
        self.base().has_children()
    }

    pub fn json(&self) -> &Doc {
        self.base().json()
    }

    /// Writes go straight to the backing document
    pub fn json_mut(&mut self) -> &mut Doc {
        match self {
            Block::Paragraph(b) | Block::Heading1(b) | Block::Heading2(b) | Block::Heading3(b) => {
                b.json_mut()
            }
            Block::BulletedListItem(b) | Block::NumberedListItem(b) | Block::Toggle(b) => {
                b.json_mut()
            }
            Block::ToDo(b) => b.json_mut(),
            Block::ChildPage(b) => b.json_mut(),
            Block::Unsupported(b) => b.json_mut(),
        }
    }

    pub fn into_json(self) -> Doc {
        match self {
            Block::Paragraph(b) | Block::Heading1(b) | Block::Heading2(b) | Block::Heading3(b) => {
                b.base.into_json()
            }
            Block::BulletedListItem(b) | Block::NumberedListItem(b) | Block::Toggle(b) => {
                b.inner.base.into_json()
            }
            Block::ToDo(b) => b.inner.inner.base.into_json(),
            Block::ChildPage(b) => b.base.into_json(),
            Block::Unsupported(b) => b.into_json(),
        }
    }

    /// Rich-text capability, if this block has one
    pub fn as_rich_text(&self) -> Option<&dyn RichTextContent> {
        match self {
            Block::Paragraph(b) | Block::Heading1(b) | Block::Heading2(b) | Block::Heading3(b) => {
                Some(b)
            }
            Block::BulletedListItem(b) | Block::NumberedListItem(b) | Block::Toggle(b) => Some(b),
            Block::ToDo(b) => Some(b),
            Block::ChildPage(_) | Block::Unsupported(_) => None,
        }
    }

    pub fn as_rich_text_mut(&mut self) -> Option<&mut dyn RichTextContent> {
        match self {
            Block::Paragraph(b) | Block::Heading1(b) | Block::Heading2(b) | Block::Heading3(b) => {
                Some(b)
            }
            Block::BulletedListItem(b) | Block::NumberedListItem(b) | Block::Toggle(b) => Some(b),
            Block::ToDo(b) => Some(b),
            Block::ChildPage(_) | Block::Unsupported(_) => None,
        }
    }

    /// Children capability, if this block has one
    pub fn as_children(&self) -> Option<&dyn ChildrenContent> {
        match self {
            Block::BulletedListItem(b) | Block::NumberedListItem(b) | Block::Toggle(b) => Some(b),
            Block::ToDo(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_children_mut(&mut self) -> Option<&mut dyn ChildrenContent> {
        match self {
            Block::BulletedListItem(b) | Block::NumberedListItem(b) | Block::Toggle(b) => Some(b),
            Block::ToDo(b) => Some(b),
            _ => None,
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.json(), f)
    }
}

// Comprehensive tests in separate module
#[cfg(test)]
#[path = "block_test.rs"]
mod block_test;
