//! Pages
//!
//! A page is a property bag under a parent. Property values are decoded on
//! demand from `properties`; values of an unknown kind are skipped with a
//! warning so one new column type does not hide the rest of the page.

use crate::models::time::parse_timestamp;
use crate::models::{Doc, DocumentError, ObjectKind, Property};
use chrono::{DateTime, Utc};
use std::fmt;

/// Where a page lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parent {
    Database(String),
    Page(String),
    Workspace,
}

impl Parent {
    pub fn type_name(&self) -> &'static str {
        match self {
            Parent::Database(_) => "database_id",
            Parent::Page(_) => "page_id",
            Parent::Workspace => "workspace",
        }
    }

    /// Id of the parent, empty for the workspace
    pub fn id(&self) -> &str {
        match self {
            Parent::Database(id) | Parent::Page(id) => id,
            Parent::Workspace => "",
        }
    }

    /// `{"type": "page_id", "page_id": "…"}`, or `"workspace": true`
    pub fn to_doc(&self) -> Doc {
        let doc = Doc::new().with("type", self.type_name());
        match self {
            Parent::Database(id) | Parent::Page(id) => doc.with(self.type_name(), id.clone()),
            Parent::Workspace => doc.with(self.type_name(), true),
        }
    }

    /// # Errors
    ///
    /// Returns `DocumentError::UnknownVariant` for an unrecognised parent type.
    pub fn from_doc(doc: &Doc) -> Result<Self, DocumentError> {
        let kind = doc.get_string("type");
        match kind.as_str() {
            "database_id" => Ok(Parent::Database(doc.get_string("database_id"))),
            "page_id" => Ok(Parent::Page(doc.get_string("page_id"))),
            "workspace" => Ok(Parent::Workspace),
            _ => Err(DocumentError::unknown_variant("parent", kind)),
        }
    }
}

/// View over a `page` document
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    json: Doc,
}

impl Page {
    /// Empty page under `parent`, ready to receive properties
    pub fn new(parent: &Parent) -> Self {
        Self {
            json: Doc::new()
                .with("parent", parent.to_doc())
                .with("properties", Doc::new()),
        }
    }

    pub fn from_doc(json: Doc) -> Self {
        Self { json }
    }

    pub fn object(&self) -> &'static str {
        ObjectKind::Page.as_str()
    }

    pub fn id(&self) -> String {
        self.json.get_string("id")
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

    pub fn archived(&self) -> bool {
        self.json.get_bool("archived")
    }

    pub fn url(&self) -> String {
        self.json.get_string("url")
    }

    /// `None` when the parent is absent or of an unknown kind
    pub fn parent(&self) -> Option<Parent> {
        Parent::from_doc(self.json.get_doc("parent")?).ok()
    }

    /// Decode every property value, ordered by column name
    pub fn properties(&self) -> Vec<Property> {
        let Some(properties) = self.json.get_doc("properties") else {
            return Vec::new();
        };

        properties
            .iter()
            .filter_map(|(name, value)| {
                let doc = value.as_doc().cloned().unwrap_or_default();
                match Property::assign(name.clone(), doc) {
                    Ok(property) => Some(property),
                    Err(e) => {
                        tracing::warn!("Skipping page property '{}': {}", name, e);
                        None
                    }
                }
            })
            .collect()
    }

    /// Decode a single property value by column name
    pub fn property(&self, name: &str) -> Option<Property> {
        let doc = self.json.get_doc("properties")?.get_doc(name)?.clone();
        Property::assign(name, doc).ok()
    }

    /// Store a property under its column name, replacing any previous value
    pub fn set_property(&mut self, property: Property) {
        let name = property.name().to_string();
        if self.json.get_doc("properties").is_none() {
            self.json.insert("properties", Doc::new());
        }
        if let Some(properties) = self.json.get_doc_mut("properties") {
            properties.insert(name, property.into_json());
        }
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
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.json, f)
    }
}

// Comprehensive tests in separate module
#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;
