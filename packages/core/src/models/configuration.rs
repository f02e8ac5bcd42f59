//! Database Column Configurations
//!
//! A database describes its columns under `properties`, keyed by column name.
//! The discriminators are the property kinds, but the payload is the column's
//! schema rather than a cell value: a number column carries its `format`,
//! select columns their `options`, a formula column its `expression`, and the
//! remaining kinds an empty object.

use crate::models::capability::Wrapper;
use crate::models::registry::{self, Catalog};
use crate::models::{Doc, DocumentError, SelectOption};
use std::fmt;

/// Database column catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigurationType {
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

impl Catalog for ConfigurationType {
    const KIND: &'static str = "configuration";
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

impl fmt::Display for ConfigurationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name, id and backing document of a column
#[derive(Debug, Clone, PartialEq)]
pub struct BaseConfiguration {
    name: String,
    json: Doc,
}

impl BaseConfiguration {
    fn new(name: String, kind: ConfigurationType, payload: Doc) -> Self {
        let json = Doc::new()
            .with("type", kind.as_str())
            .with(kind.as_str(), payload);
        Self { name, json }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> String {
        self.json.get_string("id")
    }

    fn payload(&self) -> Option<&Doc> {
        self.json.get_doc(&self.json.get_string("type"))
    }
}

impl Wrapper for BaseConfiguration {
    fn json(&self) -> &Doc {
        &self.json
    }

    fn json_mut(&mut self) -> &mut Doc {
        &mut self.json
    }
}

/// Number column
#[derive(Debug, Clone, PartialEq)]
pub struct NumberConfiguration {
    base: BaseConfiguration,
}

impl NumberConfiguration {
    pub fn base(&self) -> &BaseConfiguration {
        &self.base
    }

    /// Display format such as `number_with_commas` or `dollar`
    pub fn format(&self) -> String {
        self.base
            .payload()
            .map(|payload| payload.get_string("format"))
            .unwrap_or_default()
    }
}

/// Select or multi-select column
#[derive(Debug, Clone, PartialEq)]
pub struct SelectConfiguration {
    base: BaseConfiguration,
}

impl SelectConfiguration {
    pub fn base(&self) -> &BaseConfiguration {
        &self.base
    }

    /// Declared options, malformed entries skipped
    pub fn options(&self) -> Vec<SelectOption> {
        self.base
            .payload()
            .and_then(|payload| payload.get_doc_list("options"))
            .unwrap_or_default()
            .iter()
            .filter_map(|doc| doc.unmarshal().ok())
            .collect()
    }
}

/// Formula column
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaConfiguration {
    base: BaseConfiguration,
}

impl FormulaConfiguration {
    pub fn base(&self) -> &BaseConfiguration {
        &self.base
    }

    pub fn expression(&self) -> String {
        self.base
            .payload()
            .map(|payload| payload.get_string("expression"))
            .unwrap_or_default()
    }
}

/// Every column configuration the catalog knows
#[derive(Debug, Clone, PartialEq)]
pub enum Configuration {
    Title(BaseConfiguration),
    RichText(BaseConfiguration),
    Number(NumberConfiguration),
    Select(SelectConfiguration),
    MultiSelect(SelectConfiguration),
    Date(BaseConfiguration),
    Formula(FormulaConfiguration),
    People(BaseConfiguration),
    Files(BaseConfiguration),
    Checkbox(BaseConfiguration),
    Url(BaseConfiguration),
    Email(BaseConfiguration),
    PhoneNumber(BaseConfiguration),
}

impl Configuration {
    /// Promote the raw schema of column `name` into its typed configuration
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::UnknownVariant` for a missing or unknown `type`.
    pub fn assign(name: impl Into<String>, json: Doc) -> Result<Self, DocumentError> {
        let kind = registry::resolve::<ConfigurationType>(&json)?;
        let base = BaseConfiguration {
            name: name.into(),
            json,
        };
        Ok(Self::wrap(kind, base))
    }

    fn wrap(kind: ConfigurationType, base: BaseConfiguration) -> Self {
        match kind {
            ConfigurationType::Title => Configuration::Title(base),
            ConfigurationType::RichText => Configuration::RichText(base),
            ConfigurationType::Number => Configuration::Number(NumberConfiguration { base }),
            ConfigurationType::Select => Configuration::Select(SelectConfiguration { base }),
            ConfigurationType::MultiSelect => {
                Configuration::MultiSelect(SelectConfiguration { base })
            }
            ConfigurationType::Date => Configuration::Date(base),
            ConfigurationType::Formula => Configuration::Formula(FormulaConfiguration { base }),
            ConfigurationType::People => Configuration::People(base),
            ConfigurationType::Files => Configuration::Files(base),
            ConfigurationType::Checkbox => Configuration::Checkbox(base),
            ConfigurationType::Url => Configuration::Url(base),
            ConfigurationType::Email => Configuration::Email(base),
            ConfigurationType::PhoneNumber => Configuration::PhoneNumber(base),
        }
    }

    /// Column whose schema has no settings, e.g. `checkbox` or `title`
    ///
    /// Number, select, multi-select and formula columns get their own
    /// constructors; passing one of those kinds here yields an empty payload.
    pub fn simple(name: impl Into<String>, kind: ConfigurationType) -> Self {
        Self::wrap(kind, BaseConfiguration::new(name.into(), kind, Doc::new()))
    }

    pub fn number(name: impl Into<String>, format: impl Into<String>) -> Self {
        let payload = Doc::new().with("format", format.into());
        Self::wrap(
            ConfigurationType::Number,
            BaseConfiguration::new(name.into(), ConfigurationType::Number, payload),
        )
    }

    /// # Errors
    ///
    /// Returns `DocumentError::Decode` if an option cannot be serialized.
    pub fn select(name: impl Into<String>, options: &[SelectOption]) -> Result<Self, DocumentError> {
        Self::with_options(name.into(), ConfigurationType::Select, options)
    }

    pub fn multi_select(
        name: impl Into<String>,
        options: &[SelectOption],
    ) -> Result<Self, DocumentError> {
        Self::with_options(name.into(), ConfigurationType::MultiSelect, options)
    }

    fn with_options(
        name: String,
        kind: ConfigurationType,
        options: &[SelectOption],
    ) -> Result<Self, DocumentError> {
        let options = options
            .iter()
            .map(Doc::marshal)
            .collect::<Result<Vec<Doc>, _>>()?;
        let payload = Doc::new().with("options", options);
        Ok(Self::wrap(kind, BaseConfiguration::new(name, kind, payload)))
    }

    pub fn formula(name: impl Into<String>, expression: impl Into<String>) -> Self {
        let payload = Doc::new().with("expression", expression.into());
        Self::wrap(
            ConfigurationType::Formula,
            BaseConfiguration::new(name.into(), ConfigurationType::Formula, payload),
        )
    }

    pub fn configuration_type(&self) -> ConfigurationType {
        match self {
            Configuration::Title(_) => ConfigurationType::Title,
            Configuration::RichText(_) => ConfigurationType::RichText,
            Configuration::Number(_) => ConfigurationType::Number,
            Configuration::Select(_) => ConfigurationType::Select,
            Configuration::MultiSelect(_) => ConfigurationType::MultiSelect,
            Configuration::Date(_) => ConfigurationType::Date,
            Configuration::Formula(_) => ConfigurationType::Formula,
            Configuration::People(_) => ConfigurationType::People,
            Configuration::Files(_) => ConfigurationType::Files,
            Configuration::Checkbox(_) => ConfigurationType::Checkbox,
            Configuration::Url(_) => ConfigurationType::Url,
            Configuration::Email(_) => ConfigurationType::Email,
            Configuration::PhoneNumber(_) => ConfigurationType::PhoneNumber,
        }
    }

    pub fn base(&self) -> &BaseConfiguration {
        match self {
            Configuration::Number(c) => &c.base,
            Configuration::Select(c) | Configuration::MultiSelect(c) => &c.base,
            Configuration::Formula(c) => &c.base,
            Configuration::Title(base)
            | Configuration::RichText(base)
            | Configuration::Date(base)
            | Configuration::People(base)
            | Configuration::Files(base)
            | Configuration::Checkbox(base)
            | Configuration::Url(base)
            | Configuration::Email(base)
            | Configuration::PhoneNumber(base) => base,
        }
    }

    fn base_mut(&mut self) -> &mut BaseConfiguration {
        match self {
            Configuration::Number(c) => &mut c.base,
            Configuration::Select(c) | Configuration::MultiSelect(c) => &mut c.base,
            Configuration::Formula(c) => &mut c.base,
            Configuration::Title(base)
            | Configuration::RichText(base)
            | Configuration::Date(base)
            | Configuration::People(base)
            | Configuration::Files(base)
            | Configuration::Checkbox(base)
            | Configuration::Url(base)
            | Configuration::Email(base)
            | Configuration::PhoneNumber(base) => base,
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
            Configuration::Number(c) => c.base.json,
            Configuration::Select(c) | Configuration::MultiSelect(c) => c.base.json,
            Configuration::Formula(c) => c.base.json,
            Configuration::Title(base)
            | Configuration::RichText(base)
            | Configuration::Date(base)
            | Configuration::People(base)
            | Configuration::Files(base)
            | Configuration::Checkbox(base)
            | Configuration::Url(base)
            | Configuration::Email(base)
            | Configuration::PhoneNumber(base) => base.json,
        }
    }
}

// Comprehensive tests in separate module
#[cfg(test)]
#[path = "configuration_test.rs"]
mod configuration_test;
