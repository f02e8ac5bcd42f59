//! Pagination
//!
//! List endpoints answer with an envelope:
//!
//! ```json
//! {"object": "list", "has_more": true, "next_cursor": "c2", "results": [ … ]}
//! ```
//!
//! `results` stays untyped until an accessor is called. The kind accessors
//! decode every element as a document and keep only those whose `object`
//! tag matches, so a mixed result set from search can be split by kind.

use crate::models::{decode, Block, Database, Doc, DocumentError, ObjectKind, Page, User, Value};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Cursor and page size sent with a list request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PaginationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.start_cursor = Some(cursor.into());
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Request for the page after `response`, `None` when there is no more
    pub fn next(&self, response: &PaginationResponse) -> Option<Self> {
        if !response.has_more {
            return None;
        }
        let cursor = response.next_cursor.clone()?;
        Some(Self {
            start_cursor: Some(cursor),
            page_size: self.page_size,
        })
    }

    fn cursor(&self) -> Option<&str> {
        self.start_cursor.as_deref().filter(|c| !c.is_empty())
    }

    fn size(&self) -> Option<u32> {
        self.page_size.filter(|size| *size > 0)
    }

    /// `page_size=…&start_cursor=…`, empty or zero fields omitted
    pub fn query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(size) = self.size() {
            params.push(format!("page_size={}", size));
        }
        if let Some(cursor) = self.cursor() {
            params.push(format!("start_cursor={}", cursor));
        }
        params.join("&")
    }

    /// Body fields for POST list endpoints
    pub fn json(&self) -> Doc {
        let mut doc = Doc::new();
        if let Some(size) = self.size() {
            doc.insert("page_size", size);
        }
        if let Some(cursor) = self.cursor() {
            doc.insert("start_cursor", cursor);
        }
        doc
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationResponse {
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
    /// Always `list`
    #[serde(default = "list_object")]
    pub object: String,
    #[serde(default)]
    pub results: Vec<Value>,
}

fn list_object() -> String {
    "list".to_string()
}

impl Default for PaginationResponse {
    fn default() -> Self {
        Self {
            has_more: false,
            next_cursor: None,
            object: list_object(),
            results: Vec::new(),
        }
    }
}

impl PaginationResponse {
    /// # Errors
    ///
    /// Returns `DocumentError::Decode` if the bytes are not an envelope.
    pub fn decode(bytes: &[u8]) -> Result<Self, DocumentError> {
        Self::from_doc(&decode(bytes)?)
    }

    pub fn from_doc(doc: &Doc) -> Result<Self, DocumentError> {
        doc.unmarshal()
    }

    /// Decode `results` into any deserializable shape
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Decode` if the results do not fit `T`.
    pub fn unmarshal<T: DeserializeOwned>(&self) -> Result<T, DocumentError> {
        let results = serde_json::to_value(&self.results)?;
        Ok(serde_json::from_value(results)?)
    }

    fn results_of(&self, kind: ObjectKind) -> Result<Vec<Doc>, DocumentError> {
        let results: Vec<Doc> = self.unmarshal()?;
        let total = results.len();
        let matching: Vec<Doc> = results
            .into_iter()
            .filter(|doc| doc.get_string("object") == kind.as_str())
            .collect();
        if matching.len() < total {
            tracing::debug!(
                "Skipped {} of {} results that are not {} objects",
                total - matching.len(),
                total,
                kind
            );
        }
        Ok(matching)
    }

    pub fn users(&self) -> Result<Vec<User>, DocumentError> {
        Ok(self
            .results_of(ObjectKind::User)?
            .into_iter()
            .map(User::from_doc)
            .collect())
    }

    /// Block results; blocks of an unknown type are dropped
    pub fn blocks(&self) -> Result<Vec<Block>, DocumentError> {
        Ok(self
            .results_of(ObjectKind::Block)?
            .into_iter()
            .filter_map(|doc| match Block::assign(doc) {
                Ok(block) => Some(block),
                Err(e) => {
                    tracing::warn!("Skipping block result: {}", e);
                    None
                }
            })
            .collect())
    }

    pub fn pages(&self) -> Result<Vec<Page>, DocumentError> {
        Ok(self
            .results_of(ObjectKind::Page)?
            .into_iter()
            .map(Page::from_doc)
            .collect())
    }

    pub fn databases(&self) -> Result<Vec<Database>, DocumentError> {
        Ok(self
            .results_of(ObjectKind::Database)?
            .into_iter()
            .map(Database::from_doc)
            .collect())
    }
}

// Comprehensive tests in separate module
#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;
