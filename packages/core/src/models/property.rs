//! Page Properties
//!
//! A page stores its values under `properties`, keyed by column name. Each
//! value is a tag-discriminated document whose payload sits directly under the
//! discriminator key:
//!
//! ```json
//! {"Status": {"id": "a1b2", "type": "select", "select": {"name": "Done", "color": "green"}}}
//! ```
//!
//! The column name is not part of the document, so [`Property::assign`] takes
//! it alongside the raw value. Title and rich-text properties keep their runs
//! at `doc[type]` itself rather than at `doc[type]["text"]`.

use crate::models::capability::{RichTextContent, Wrapper};
use crate::models::registry::{self, Catalog};
use crate::models::{DateRange, Doc, DocumentError, FileRef, RichText, SelectOption, User, Value};
use serde::Serialize;
use std::fmt;

/// Page property catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Title,
    RichText,
    Number,
    Select,
    MultiSelect,
    Date,
    Formula,
    People,
    Files,
    Checkbox,
    Url,
    Email,
    PhoneNumber,
}

impl Catalog for PropertyType {
    const KIND: &'static str = "property";
    const ALL: &'static [Self] = &[
        Self::Title,
        Self::RichText,
        Self::Number,
        Self::Select,
        Self::MultiSelect,
        Self::Date,
        Self::Formula,
        Self::People,
        Self::Files,
        Self::Checkbox,
        Self::Url,
        Self::Email,
        Self::PhoneNumber,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::RichText => "rich_text",
            Self::Number => "number",
            Self::Select => "select",
            Self::MultiSelect => "multi_select",
            Self::Date => "date",
            Self::Formula => "formula",
            Self::People => "people",
            Self::Files => "files",
            Self::Checkbox => "checkbox",
            Self::Url => "url",
            Self::Email => "email",
            Self::PhoneNumber => "phone_number",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name, id and backing document of a property value
#[derive(Debug, Clone, PartialEq)]
pub struct BaseProperty {
    name: String,
    json: Doc,
}

impl BaseProperty {
    fn new(name: String, kind: PropertyType, payload: impl Into<Value>) -> Self {
        let json = Doc::new()
            .with("type", kind.as_str())
            .with(kind.as_str(), payload);
        Self { name, json }
    }

    fn with_id(mut self, id: &str) -> Self {
        if !id.trim().is_empty() {
            self.json.insert("id", id);
        }
        self
    }

    /// Column name, empty if the property was never attached to one
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Service-assigned id, empty for new values
    pub fn id(&self) -> String {
        self.json.get_string("id")
    }

    fn payload(&self) -> Option<&Value> {
        self.json.get(&self.json.get_string("type"))
    }

    fn payload_doc(&self) -> Option<&Doc> {
        self.payload().and_then(Value::as_doc)
    }

    fn payload_docs(&self) -> Vec<Doc> {
        self.json
            .get_doc_list(&self.json.get_string("type"))
            .unwrap_or_default()
    }
}

impl Wrapper for BaseProperty {
    fn json(&self) -> &Doc {
        &self.json
    }

    fn json_mut(&mut self) -> &mut Doc {
        &mut self.json
    }
}

/// Title or rich-text value, runs held at `doc[type]`
#[derive(Debug, Clone, PartialEq)]
pub struct RichTextProperty {
    base: BaseProperty,
}

impl RichTextProperty {
    fn new(name: String, id: &str, kind: PropertyType, text: &[RichText]) -> Self {
        let mut property = Self {
            base: BaseProperty::new(name, kind, Vec::<Value>::new()).with_id(id),
        };
        if let Err(e) = property.add_text(text) {
            tracing::warn!("Failed to seed {} property text: {}", kind, e);
        }
        property
    }

    pub fn base(&self) -> &BaseProperty {
        &self.base
    }

    /// Runs joined into one string
    pub fn plain_text(&self) -> String {
        self.list_text()
            .map(|runs| runs.iter().map(RichText::plain_text).collect())
            .unwrap_or_default()
    }
}

impl Wrapper for RichTextProperty {
    fn json(&self) -> &Doc {
        self.base.json()
    }

    fn json_mut(&mut self) -> &mut Doc {
        self.base.json_mut()
    }
}

impl RichTextContent for RichTextProperty {
    fn text_path(&self) -> Result<Vec<String>, DocumentError> {
        let discriminator = self.discriminator();
        if discriminator.is_empty() {
            return Err(DocumentError::missing_field("type"));
        }
        Ok(vec![discriminator])
    }
}

/// `number` value, null when the cell is empty
#[derive(Debug, Clone, PartialEq)]
pub struct NumberProperty {
    base: BaseProperty,
}

impl NumberProperty {
    pub fn base(&self) -> &BaseProperty {
        &self.base
    }

    pub fn number(&self) -> Option<f64> {
        self.base.payload().and_then(Value::as_f64)
    }
}

/// `select` value
#[derive(Debug, Clone, PartialEq)]
pub struct SelectProperty {
    base: BaseProperty,
}

impl SelectProperty {
    pub fn base(&self) -> &BaseProperty {
        &self.base
    }

    /// Chosen option, `None` when empty or malformed
    pub fn option(&self) -> Option<SelectOption> {
        self.base.payload_doc()?.unmarshal().ok()
    }
}

/// `multi_select` value
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelectProperty {
    base: BaseProperty,
}

impl MultiSelectProperty {
    pub fn base(&self) -> &BaseProperty {
        &self.base
    }

    /// Chosen options, malformed entries skipped
    pub fn options(&self) -> Vec<SelectOption> {
        self.base
            .payload_docs()
            .iter()
            .filter_map(|doc| doc.unmarshal().ok())
            .collect()
    }
}

/// `date` value
#[derive(Debug, Clone, PartialEq)]
pub struct DateProperty {
    base: BaseProperty,
}

impl DateProperty {
    pub fn base(&self) -> &BaseProperty {
        &self.base
    }

    pub fn date(&self) -> Option<DateRange> {
        self.base.payload_doc()?.unmarshal().ok()
    }
}

/// Computed result of a formula column
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaValue {
    Number(f64),
    Boolean(bool),
    String(String),
    Date(DateRange),
}

impl FormulaValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            FormulaValue::Number(_) => "number",
            FormulaValue::Boolean(_) => "boolean",
            FormulaValue::String(_) => "string",
            FormulaValue::Date(_) => "date",
        }
    }

    fn to_doc(&self) -> Result<Doc, DocumentError> {
        let mut doc = Doc::new().with("type", self.type_name());
        match self {
            FormulaValue::Number(n) => doc.insert("number", *n),
            FormulaValue::Boolean(b) => doc.insert("boolean", *b),
            FormulaValue::String(s) => doc.insert("string", s.clone()),
            FormulaValue::Date(date) => doc.insert("date", Doc::marshal(date)?),
        };
        Ok(doc)
    }

    fn from_doc(doc: &Doc) -> Option<Self> {
        match doc.get_string("type").as_str() {
            "number" => Some(FormulaValue::Number(doc.get_float("number"))),
            "boolean" => Some(FormulaValue::Boolean(doc.get_bool("boolean"))),
            "string" => Some(FormulaValue::String(doc.get_string("string"))),
            "date" => doc
                .get_doc("date")
                .and_then(|date| date.unmarshal().ok())
                .map(FormulaValue::Date),
            _ => None,
        }
    }
}

/// `formula` value
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaProperty {
    base: BaseProperty,
}

impl FormulaProperty {
    pub fn base(&self) -> &BaseProperty {
        &self.base
    }

    /// Result of the formula, `None` for an unknown result type
    pub fn formula(&self) -> Option<FormulaValue> {
        FormulaValue::from_doc(self.base.payload_doc()?)
    }
}

/// `people` value
#[derive(Debug, Clone, PartialEq)]
pub struct PeopleProperty {
    base: BaseProperty,
}

impl PeopleProperty {
    pub fn base(&self) -> &BaseProperty {
        &self.base
    }

    pub fn users(&self) -> Vec<User> {
        self.base
            .payload_docs()
            .into_iter()
            .map(User::from_doc)
            .collect()
    }
}

/// `files` value
#[derive(Debug, Clone, PartialEq)]
pub struct FilesProperty {
    base: BaseProperty,
}

impl FilesProperty {
    pub fn base(&self) -> &BaseProperty {
        &self.base
    }

    pub fn files(&self) -> Vec<FileRef> {
        self.base
            .payload_docs()
            .iter()
            .filter_map(|doc| doc.unmarshal().ok())
            .collect()
    }
}

/// `checkbox` value
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxProperty {
    base: BaseProperty,
}

impl CheckboxProperty {
    pub fn base(&self) -> &BaseProperty {
        &self.base
    }

    pub fn checked(&self) -> bool {
        self.base.json.get_bool(PropertyType::Checkbox.as_str())
    }
}

/// Plain string value: `url`, `email` or `phone_number`
#[derive(Debug, Clone, PartialEq)]
pub struct StringProperty {
    base: BaseProperty,
}

impl StringProperty {
    pub fn base(&self) -> &BaseProperty {
        &self.base
    }

    pub fn value(&self) -> String {
        self.base.json.get_string(&self.base.json.get_string("type"))
    }
}

/// Every page property value the catalog knows
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    Title(RichTextProperty),
    RichText(RichTextProperty),
    Number(NumberProperty),
    Select(SelectProperty),
    MultiSelect(MultiSelectProperty),
    Date(DateProperty),
    Formula(FormulaProperty),
    People(PeopleProperty),
    Files(FilesProperty),
    Checkbox(CheckboxProperty),
    Url(StringProperty),
    Email(StringProperty),
    PhoneNumber(StringProperty),
}

impl Property {
    /// Promote the raw value of column `name` into its typed property
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::UnknownVariant` for a missing or unknown `type`.
    pub fn assign(name: impl Into<String>, json: Doc) -> Result<Self, DocumentError> {
        let kind = registry::resolve::<PropertyType>(&json)?;
        let base = BaseProperty {
            name: name.into(),
            json,
        };
        let property = match kind {
            PropertyType::Title => Property::Title(RichTextProperty { base }),
            PropertyType::RichText => Property::RichText(RichTextProperty { base }),
            PropertyType::Number => Property::Number(NumberProperty { base }),
            PropertyType::Select => Property::Select(SelectProperty { base }),
            PropertyType::MultiSelect => Property::MultiSelect(MultiSelectProperty { base }),
            PropertyType::Date => Property::Date(DateProperty { base }),
            PropertyType::Formula => Property::Formula(FormulaProperty { base }),
            PropertyType::People => Property::People(PeopleProperty { base }),
            PropertyType::Files => Property::Files(FilesProperty { base }),
            PropertyType::Checkbox => Property::Checkbox(CheckboxProperty { base }),
            PropertyType::Url => Property::Url(StringProperty { base }),
            PropertyType::Email => Property::Email(StringProperty { base }),
            PropertyType::PhoneNumber => Property::PhoneNumber(StringProperty { base }),
        };
        Ok(property)
    }

    /// Title value; titles always carry the id `title`
    pub fn title(name: impl Into<String>, text: Vec<RichText>) -> Self {
        Property::Title(RichTextProperty::new(
            name.into(),
            "title",
            PropertyType::Title,
            &text,
        ))
    }

    pub fn rich_text(name: impl Into<String>, text: Vec<RichText>) -> Self {
        Property::RichText(RichTextProperty::new(
            name.into(),
            "",
            PropertyType::RichText,
            &text,
        ))
    }

    pub fn number(name: impl Into<String>, number: f64) -> Self {
        Property::Number(NumberProperty {
            base: BaseProperty::new(name.into(), PropertyType::Number, number),
        })
    }

    /// # Errors
    ///
    /// Returns `DocumentError::Decode` if the option cannot be serialized.
    pub fn select(name: impl Into<String>, option: &SelectOption) -> Result<Self, DocumentError> {
        Ok(Property::Select(SelectProperty {
            base: BaseProperty::new(name.into(), PropertyType::Select, Doc::marshal(option)?),
        }))
    }

    pub fn multi_select(
        name: impl Into<String>,
        options: &[SelectOption],
    ) -> Result<Self, DocumentError> {
        Ok(Property::MultiSelect(MultiSelectProperty {
            base: BaseProperty::new(name.into(), PropertyType::MultiSelect, marshal_all(options)?),
        }))
    }

    pub fn date(name: impl Into<String>, date: &DateRange) -> Result<Self, DocumentError> {
        Ok(Property::Date(DateProperty {
            base: BaseProperty::new(name.into(), PropertyType::Date, Doc::marshal(date)?),
        }))
    }

    pub fn formula(name: impl Into<String>, value: &FormulaValue) -> Result<Self, DocumentError> {
        Ok(Property::Formula(FormulaProperty {
            base: BaseProperty::new(name.into(), PropertyType::Formula, value.to_doc()?),
        }))
    }

    pub fn people(name: impl Into<String>, users: Vec<User>) -> Self {
        let list: Vec<Doc> = users.into_iter().map(User::into_json).collect();
        Property::People(PeopleProperty {
            base: BaseProperty::new(name.into(), PropertyType::People, list),
        })
    }

    pub fn files(name: impl Into<String>, files: &[FileRef]) -> Result<Self, DocumentError> {
        Ok(Property::Files(FilesProperty {
            base: BaseProperty::new(name.into(), PropertyType::Files, marshal_all(files)?),
        }))
    }

    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Property::Checkbox(CheckboxProperty {
            base: BaseProperty::new(name.into(), PropertyType::Checkbox, checked),
        })
    }

    pub fn url(name: impl Into<String>, url: impl Into<String>) -> Self {
        Property::Url(StringProperty {
            base: BaseProperty::new(name.into(), PropertyType::Url, url.into()),
        })
    }

    pub fn email(name: impl Into<String>, email: impl Into<String>) -> Self {
        Property::Email(StringProperty {
            base: BaseProperty::new(name.into(), PropertyType::Email, email.into()),
        })
    }

    pub fn phone_number(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Property::PhoneNumber(StringProperty {
            base: BaseProperty::new(name.into(), PropertyType::PhoneNumber, phone_number.into()),
        })
    }

    pub fn property_type(&self) -> PropertyType {
        match self {
            Property::Title(_) => PropertyType::Title,
            Property::RichText(_) => PropertyType::RichText,
            Property::Number(_) => PropertyType::Number,
            Property::Select(_) => PropertyType::Select,
            Property::MultiSelect(_) => PropertyType::MultiSelect,
            Property::Date(_) => PropertyType::Date,
            Property::Formula(_) => PropertyType::Formula,
            Property::People(_) => PropertyType::People,
            Property::Files(_) => PropertyType::Files,
            Property::Checkbox(_) => PropertyType::Checkbox,
            Property::Url(_) => PropertyType::Url,
            Property::Email(_) => PropertyType::Email,
            Property::PhoneNumber(_) => PropertyType::PhoneNumber,
        }
    }

    pub fn base(&self) -> &BaseProperty {
        match self {
            Property::Title(p) | Property::RichText(p) => &p.base,
            Property::Number(p) => &p.base,
            Property::Select(p) => &p.base,
            Property::MultiSelect(p) => &p.base,
            Property::Date(p) => &p.base,
            Property::Formula(p) => &p.base,
            Property::People(p) => &p.base,
            Property::Files(p) => &p.base,
            Property::Checkbox(p) => &p.base,
            Property::Url(p) | Property::Email(p) | Property::PhoneNumber(p) => &p.base,
        }
    }

    fn base_mut(&mut self) -> &mut BaseProperty {
        match self {
            Property::Title(p) | Property::RichText(p) => &mut p.base,
            Property::Number(p) => &mut p.base,
            Property::Select(p) => &mut p.base,
            Property::MultiSelect(p) => &mut p.base,
            Property::Date(p) => &mut p.base,
            Property::Formula(p) => &mut p.base,
            Property::People(p) => &mut p.base,
            Property::Files(p) => &mut p.base,
            Property::Checkbox(p) => &mut p.base,
            Property::Url(p) | Property::Email(p) | Property::PhoneNumber(p) => &mut p.base,
        }
    }

    pub fn name(&self) -> &str {
        self.base().name()
    }

    pub fn id(&self) -> String {
        self.base().id()
    }

    pub fn json(&self) -> &Doc {
        self.base().json()
    }

    pub fn json_mut(&mut self) -> &mut Doc {
        self.base_mut().json_mut()
    }

    pub fn into_json(self) -> Doc {
        match self {
            Property::Title(p) | Property::RichText(p) => p.base.json,
            Property::Number(p) => p.base.json,
            Property::Select(p) => p.base.json,
            Property::MultiSelect(p) => p.base.json,
            Property::Date(p) => p.base.json,
            Property::Formula(p) => p.base.json,
            Property::People(p) => p.base.json,
            Property::Files(p) => p.base.json,
            Property::Checkbox(p) => p.base.json,
            Property::Url(p) | Property::Email(p) | Property::PhoneNumber(p) => p.base.json,
        }
    }

    /// Rich-text capability of title and rich-text values
    pub fn as_rich_text(&self) -> Option<&dyn RichTextContent> {
        match self {
            Property::Title(p) | Property::RichText(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_rich_text_mut(&mut self) -> Option<&mut dyn RichTextContent> {
        match self {
            Property::Title(p) | Property::RichText(p) => Some(p),
            _ => None,
        }
    }
}

fn marshal_all<T: Serialize>(items: &[T]) -> Result<Vec<Doc>, DocumentError> {
    items.iter().map(|item| Doc::marshal(item)).collect()
}

// Comprehensive tests in separate module
#[cfg(test)]
#[path = "property_test.rs"]
mod property_test;
