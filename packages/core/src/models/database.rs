//! Databases
//!
//! A database exposes its title as a rich-text list and its column schema as
//! a map of [`Configuration`]s. Both reads are tolerant.

use crate::models::rich_text::runs_at;
use crate::models::time::parse_timestamp;
use crate::models::{Configuration, Doc, ObjectKind, RichText};
use chrono::{DateTime, Utc};
use std::fmt;

/// View over a `database` document
#[derive(Debug, Clone, PartialEq)]
pub struct Database {
    json: Doc,
}

impl Database {
    pub fn from_doc(json: Doc) -> Self {
        Self { json }
    }

    pub fn object(&self) -> &'static str {
        ObjectKind::Database.as_str()
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

    pub fn title(&self) -> Vec<RichText> {
        runs_at(&self.json, "title")
    }

    /// Title runs joined into one string
    pub fn plain_title(&self) -> String {
        self.title().iter().map(RichText::plain_text).collect()
    }

    /// Column configurations ordered by column name, unknown kinds skipped
    pub fn properties(&self) -> Vec<Configuration> {
        let Some(properties) = self.json.get_doc("properties") else {
            return Vec::new();
        };

        properties
            .iter()
            .filter_map(|(name, value)| {
                let doc = value.as_doc().cloned().unwrap_or_default();
                match Configuration::assign(name.clone(), doc) {
                    Ok(configuration) => Some(configuration),
                    Err(e) => {
                        tracing::warn!("Skipping database column '{}': {}", name, e);
                        None
                    }
                }
            })
            .collect()
    }

    pub fn json(&self) -> &Doc {
        &self.json
    }

    pub fn into_json(self) -> Doc {
        self.json
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.json, f)
    }
}
