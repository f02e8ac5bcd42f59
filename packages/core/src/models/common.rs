//! Shared Value Types
//!
//! Small records that appear inside many documents (annotations, select
//! options, date ranges, ...). These are plain serde structs: they are
//! normalized into a [`Doc`](crate::models::Doc) whenever they are written.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Named colours used by annotations and select options
///
/// Colour names the service adds later read as [`Color::Default`] instead of
/// failing the surrounding record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
    GrayBackground,
    BrownBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
    RedBackground,
}

impl Color {
    pub const ALL: [Color; 19] = [
        Self::Default,
        Self::Gray,
        Self::Brown,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::Pink,
        Self::Red,
        Self::GrayBackground,
        Self::BrownBackground,
        Self::OrangeBackground,
        Self::YellowBackground,
        Self::GreenBackground,
        Self::BlueBackground,
        Self::PurpleBackground,
        Self::PinkBackground,
        Self::RedBackground,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Gray => "gray",
            Self::Brown => "brown",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Red => "red",
            Self::GrayBackground => "gray_background",
            Self::BrownBackground => "brown_background",
            Self::OrangeBackground => "orange_background",
            Self::YellowBackground => "yellow_background",
            Self::GreenBackground => "green_background",
            Self::BlueBackground => "blue_background",
            Self::PurpleBackground => "purple_background",
            Self::PinkBackground => "pink_background",
            Self::RedBackground => "red_background",
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name).unwrap_or_else(|| {
            tracing::debug!(color = %name, "Unrecognized colour read as default");
            Self::Default
        }))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Object kinds returned by the API and accepted by search filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    User,
    Database,
    Page,
    Block,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Database => "database",
            Self::Page => "page",
            Self::Block => "block",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text styling of a rich-text run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default)]
    pub color: Color,
}

/// Plain text payload of a rich-text run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
    #[serde(default)]
    pub link: Option<Link>,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            link: None,
        }
    }

    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(Link { url: url.into() });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

/// Inline equation payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    pub expression: String,
}

/// Option of a select or multi-select column
///
/// `id` is assigned by the service and is omitted when building new options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub color: Color,
}

impl SelectOption {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            id: None,
            name: name.into(),
            color,
        }
    }
}

/// Date or date range, both ends are ISO-8601 strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
}

impl DateRange {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: None,
        }
    }

    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }
}

/// File attached to a `files` property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
}
