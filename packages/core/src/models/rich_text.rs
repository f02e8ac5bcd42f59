//! Rich Text Runs
//!
//! A rich-text run is itself tag-discriminated: `type` is one of `text`,
//! `mention` or `equation`, and the payload lives under the key of the same
//! name. Setting a payload replaces whichever payload was there before.
//!
//! # Examples
//!
//! ```rust
//! use notion_core::models::{Annotations, Color, RichText};
//!
//! let mut run = RichText::new("Hello");
//! run.set_annotations(&Annotations { bold: true, color: Color::Red, ..Default::default() })?;
//!
//! assert_eq!(run.plain_text(), "Hello");
//! assert_eq!(run.text()?.content, "Hello");
//! assert!(run.annotations()?.bold);
//! # Ok::<(), notion_core::models::DocumentError>(())
//! ```

use crate::models::registry::{self, Catalog};
use crate::models::{
    Annotations, DateRange, Doc, DocumentError, Equation, Text, User, Value,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Discriminators of a rich-text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RichTextType {
    Text,
    Mention,
    Equation,
}

impl Catalog for RichTextType {
    const KIND: &'static str = "rich text";
    const ALL: &'static [Self] = &[Self::Text, Self::Mention, Self::Equation];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Mention => "mention",
            Self::Equation => "equation",
        }
    }
}

/// Target of a `mention` run
#[derive(Debug, Clone, PartialEq)]
pub enum Mention {
    User(User),
    Page { id: String },
    Database { id: String },
    Date(DateRange),
}

impl Mention {
    fn name(&self) -> &'static str {
        match self {
            Mention::User(_) => "user",
            Mention::Page { .. } => "page",
            Mention::Database { .. } => "database",
            Mention::Date(_) => "date",
        }
    }

    fn payload(&self) -> Result<Doc, DocumentError> {
        match self {
            Mention::User(user) => Ok(user.json().clone()),
            Mention::Page { id } | Mention::Database { id } => {
                Ok(Doc::new().with("id", id.clone()))
            }
            Mention::Date(date) => Doc::marshal(date),
        }
    }

    fn from_doc(mention: &Doc) -> Result<Self, DocumentError> {
        let kind = mention.get_string("type");
        let payload = mention
            .get_doc(&kind)
            .ok_or_else(|| DocumentError::missing_field(format!("mention.{}", kind)))?;
        match kind.as_str() {
            "user" => Ok(Mention::User(User::from_doc(payload.clone()))),
            "page" => Ok(Mention::Page {
                id: payload.get_string("id"),
            }),
            "database" => Ok(Mention::Database {
                id: payload.get_string("id"),
            }),
            "date" => Ok(Mention::Date(payload.unmarshal()?)),
            _ => Err(DocumentError::unknown_variant("mention", kind)),
        }
    }
}

/// View over one rich-text run
#[derive(Debug, Clone, PartialEq)]
pub struct RichText {
    json: Doc,
}

impl RichText {
    /// Unstyled text run
    pub fn new(plain_text: impl Into<String>) -> Self {
        let plain_text = plain_text.into();
        let text = Doc::new()
            .with("content", plain_text.clone())
            .with("link", Value::Null);
        let json = Doc::new()
            .with("type", RichTextType::Text.as_str())
            .with("text", text)
            .with("plain_text", plain_text)
            .with("href", Value::Null);
        Self { json }
    }

    /// Wrap a decoded run
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::UnknownVariant` if `type` is not a rich-text kind.
    pub fn from_doc(json: Doc) -> Result<Self, DocumentError> {
        registry::resolve::<RichTextType>(&json)?;
        Ok(Self { json })
    }

    pub fn rich_type(&self) -> String {
        self.json.get_string("type")
    }

    pub fn plain_text(&self) -> String {
        self.json.get_string("plain_text")
    }

    /// Link target, `None` when null or absent
    pub fn href(&self) -> Option<String> {
        self.json.get("href").and_then(Value::as_str).map(str::to_string)
    }

    /// # Errors
    ///
    /// Returns `DocumentError::MissingField` when the run carries no annotations.
    pub fn annotations(&self) -> Result<Annotations, DocumentError> {
        self.json
            .get_doc("annotations")
            .ok_or_else(|| DocumentError::missing_field("annotations"))?
            .unmarshal()
    }

    pub fn set_annotations(&mut self, annotations: &Annotations) -> Result<(), DocumentError> {
        self.json.set("annotations", annotations)
    }

    pub fn text(&self) -> Result<Text, DocumentError> {
        self.payload(RichTextType::Text)
    }

    pub fn set_text(&mut self, text: &Text) -> Result<(), DocumentError> {
        self.set_payload(RichTextType::Text, text)
    }

    pub fn equation(&self) -> Result<Equation, DocumentError> {
        self.payload(RichTextType::Equation)
    }

    pub fn set_equation(&mut self, equation: &Equation) -> Result<(), DocumentError> {
        self.set_payload(RichTextType::Equation, equation)
    }

    /// # Errors
    ///
    /// Fails with `TypeMismatch` if the run is not a mention, `MissingField`
    /// if the mention payload is absent and `UnknownVariant` for an unknown
    /// mention kind.
    pub fn mention(&self) -> Result<Mention, DocumentError> {
        let mention: Doc = self.payload(RichTextType::Mention)?;
        Mention::from_doc(&mention)
    }

    pub fn set_mention(&mut self, mention: &Mention) -> Result<(), DocumentError> {
        let name = mention.name();
        let doc = Doc::new()
            .with("type", name)
            .with(name, mention.payload()?);
        self.set_payload(RichTextType::Mention, &doc)
    }

    pub fn json(&self) -> &Doc {
        &self.json
    }

    pub fn json_mut(&mut self) -> &mut Doc {
        &mut self.json
    }

    pub fn into_json(self) -> Doc {
        self.json
    }

    fn payload<T: DeserializeOwned>(&self, kind: RichTextType) -> Result<T, DocumentError> {
        let actual = self.rich_type();
        if actual != kind.as_str() {
            return Err(DocumentError::type_mismatch(kind.as_str(), actual));
        }
        self.json
            .get_doc(kind.as_str())
            .ok_or_else(|| DocumentError::missing_field(kind.as_str()))?
            .unmarshal()
    }

    fn set_payload<T: Serialize + ?Sized>(
        &mut self,
        kind: RichTextType,
        value: &T,
    ) -> Result<(), DocumentError> {
        let payload = Doc::marshal(value)?;
        for other in RichTextType::ALL {
            self.json.remove(other.as_str());
        }
        self.json.insert("type", kind.as_str());
        self.json.insert(kind.as_str(), payload);
        Ok(())
    }
}

/// Decode a list of runs, dropping entries that are not valid runs
pub fn decode_runs(items: Vec<Doc>) -> Vec<RichText> {
    items
        .into_iter()
        .filter_map(|doc| match RichText::from_doc(doc) {
            Ok(run) => Some(run),
            Err(e) => {
                tracing::warn!("Skipping malformed rich text entry: {}", e);
                None
            }
        })
        .collect()
}

/// Decode the runs of a list held directly under `key`, tolerantly
pub fn runs_at(doc: &Doc, key: &str) -> Vec<RichText> {
    doc.get_doc_list(key).map(decode_runs).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Color;
    use serde_json::json;

    #[test]
    fn test_new_builds_text_run() {
        let run = RichText::new("Hi");
        assert_eq!(
            run.json().to_value(),
            json!({
                "type": "text",
                "text": {"content": "Hi", "link": null},
                "plain_text": "Hi",
                "href": null
            })
        );
        assert_eq!(run.href(), None);
    }

    #[test]
    fn test_from_doc_rejects_unknown_type() {
        let doc = Doc::from_value(json!({"type": "emoji"})).unwrap();
        assert!(RichText::from_doc(doc).unwrap_err().is_unknown_variant());
        assert!(RichText::from_doc(Doc::new()).is_err());
    }

    #[test]
    fn test_annotations_missing_then_set() {
        let mut run = RichText::new("x");
        assert!(run.annotations().unwrap_err().is_missing_field());

        let styled = Annotations {
            italic: true,
            color: Color::BlueBackground,
            ..Default::default()
        };
        run.set_annotations(&styled).unwrap();
        assert_eq!(run.annotations().unwrap(), styled);
        assert_eq!(
            run.json().get_doc("annotations").unwrap().get_string("color"),
            "blue_background"
        );
    }

    #[test]
    fn test_annotations_with_new_colour_read_as_default() {
        let run = RichText::from_doc(
            Doc::from_value(json!({
                "type": "text",
                "text": {"content": "x"},
                "annotations": {"bold": true, "color": "teal_background"},
                "plain_text": "x"
            }))
            .unwrap(),
        )
        .unwrap();

        let annotations = run.annotations().unwrap();
        assert!(annotations.bold);
        assert_eq!(annotations.color, Color::Default);
        assert_eq!(Color::parse("pink_background"), Some(Color::PinkBackground));
        assert_eq!(Color::parse("teal"), None);
    }

    #[test]
    fn test_set_equation_replaces_text_payload() {
        let mut run = RichText::new("E");
        run.set_equation(&Equation {
            expression: "e=mc^2".to_string(),
        })
        .unwrap();

        assert_eq!(run.rich_type(), "equation");
        assert!(!run.json().contains_key("text"));
        assert_eq!(run.equation().unwrap().expression, "e=mc^2");
        assert!(matches!(
            run.text(),
            Err(DocumentError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_mention_round_trip() {
        let mut run = RichText::new("@page");
        let mention = Mention::Page {
            id: "page-1".to_string(),
        };
        run.set_mention(&mention).unwrap();

        assert_eq!(run.rich_type(), "mention");
        assert_eq!(
            run.json().get("mention").cloned().map(serde_json::Value::from),
            Some(json!({"type": "page", "page": {"id": "page-1"}}))
        );
        assert_eq!(run.mention().unwrap(), mention);
    }

    #[test]
    fn test_date_mention_decodes() {
        let doc = Doc::from_value(json!({
            "type": "mention",
            "mention": {"type": "date", "date": {"start": "2021-05-13", "end": null}},
            "plain_text": "2021-05-13"
        }))
        .unwrap();
        let run = RichText::from_doc(doc).unwrap();
        assert_eq!(
            run.mention().unwrap(),
            Mention::Date(DateRange::new("2021-05-13"))
        );
    }

    #[test]
    fn test_decode_runs_skips_malformed() {
        let items = vec![
            RichText::new("a").into_json(),
            Doc::new(),
            RichText::new("b").into_json(),
        ];
        let runs = decode_runs(items);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[1].plain_text(), "b");
    }
}
