//! Generic Document
//!
//! `Doc` is the key/value container every typed wrapper is a view over. It is
//! the decoded form of one JSON object: string keys mapping to [`Value`]s.
//!
//! # Invariants
//!
//! - **Homogeneous**: structured input given to [`Doc::set`] or [`Doc::append`]
//!   is normalized through serde into nested `Doc`s and lists before it is
//!   stored. Typed access downstream relies on this.
//! - **Forgiving reads**: `get_string`/`get_int`/`get_bool`/`get_float` return
//!   the zero value when a key is absent or holds another type. Use
//!   [`Doc::get`] to tell "absent" from "zero".
//! - **Key order is irrelevant**, list order is significant.
//!
//! # Examples
//!
//! ```rust
//! use notion_core::models::Doc;
//! use serde_json::json;
//!
//! let mut doc = Doc::from_value(json!({"type": "paragraph", "n": "abc"}))?;
//! assert_eq!(doc.get_string("type"), "paragraph");
//! assert_eq!(doc.get_string("missing"), "");
//! assert_eq!(doc.get_int("n"), 0);
//!
//! doc.set("paragraph", &json!({"text": []}))?;
//! assert!(doc.get_doc("paragraph").is_some());
//! # Ok::<(), notion_core::models::DocumentError>(())
//! ```

use crate::models::{DocumentError, Value};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Mapping from string keys to normalized values
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Doc(BTreeMap<String, Value>);

impl Doc {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a JSON value into a document
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Decode` if the value is not a JSON object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, DocumentError> {
        match Value::from(value) {
            Value::Doc(doc) => Ok(doc),
            other => Err(DocumentError::decode(format!(
                "expected a JSON object, found {}",
                other.type_name()
            ))),
        }
    }

    /// Convert the document back into a plain JSON value
    pub fn to_value(&self) -> serde_json::Value {
        Value::Doc(self.clone()).into()
    }

    /// Normalize any serializable value into a document
    ///
    /// This is the primitive behind every structured write: the value is
    /// serialized and read back as a `Doc`.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Decode` if `v` cannot be serialized or does
    /// not serialize to a JSON object.
    pub fn marshal<T: Serialize + ?Sized>(v: &T) -> Result<Self, DocumentError> {
        Self::from_value(serde_json::to_value(v)?)
    }

    /// Decode the document into a typed record
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Decode` if the document does not match `T`.
    pub fn unmarshal<T: DeserializeOwned>(&self) -> Result<T, DocumentError> {
        Ok(serde_json::from_value(self.to_value())?)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Read a scalar as a string, `""` when absent, null or a container
    pub fn get_string(&self, key: &str) -> String {
        self.get(key).map(Value::to_plain_string).unwrap_or_default()
    }

    /// Read an integer; numeric strings are parsed, anything else gives `0`
    pub fn get_int(&self, key: &str) -> i64 {
        match self.get(key) {
            Some(Value::Text(s)) => s.trim().parse().unwrap_or(0),
            Some(v) => v.as_i64().unwrap_or(0),
            None => 0,
        }
    }

    /// Read a boolean; `"true"`/`"1"`-style strings are accepted, anything else gives `false`
    pub fn get_bool(&self, key: &str) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Text(s)) => parse_bool(s).unwrap_or(false),
            _ => false,
        }
    }

    /// Read a float; numeric strings are parsed, anything else gives `0.0`
    pub fn get_float(&self, key: &str) -> f64 {
        match self.get(key) {
            Some(Value::Text(s)) => s.trim().parse().unwrap_or(0.0),
            Some(v) => v.as_f64().unwrap_or(0.0),
            None => 0.0,
        }
    }

    /// Borrow a nested document
    pub fn get_doc(&self, key: &str) -> Option<&Doc> {
        self.get(key).and_then(Value::as_doc)
    }

    /// Mutably borrow a nested document, writes land in this document
    pub fn get_doc_mut(&mut self, key: &str) -> Option<&mut Doc> {
        self.get_mut(key).and_then(Value::as_doc_mut)
    }

    /// Borrow a raw list
    pub fn get_list(&self, key: &str) -> Option<&Vec<Value>> {
        self.get(key).and_then(Value::as_list)
    }

    pub fn get_list_mut(&mut self, key: &str) -> Option<&mut Vec<Value>> {
        self.get_mut(key).and_then(Value::as_list_mut)
    }

    /// Read a list as documents
    ///
    /// Returns `None` when the key is absent or not a list. Elements that are
    /// not objects come back as empty documents, so strict consumers reject
    /// them on their discriminator and tolerant consumers skip them.
    pub fn get_doc_list(&self, key: &str) -> Option<Vec<Doc>> {
        self.get_list(key).map(|items| {
            items
                .iter()
                .map(|item| item.as_doc().cloned().unwrap_or_default())
                .collect()
        })
    }

    /// Store a value that is already in document form
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style [`Doc::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Store any serializable value, normalizing structured values first
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Decode` if the value cannot be serialized.
    pub fn set<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<(), DocumentError> {
        let normalized = Value::from(serde_json::to_value(value)?);
        self.0.insert(key.into(), normalized);
        Ok(())
    }

    /// Append a normalized document to an existing list
    ///
    /// Returns `Ok(false)` without touching the document when `key` does not
    /// already hold a list.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Decode` if the value cannot be serialized to an object.
    pub fn append<T: Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<bool, DocumentError> {
        if self.get_list(key).is_none() {
            return Ok(false);
        }
        let doc = Doc::marshal(value)?;
        match self.get_list_mut(key) {
            Some(list) => {
                list.push(Value::Doc(doc));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Pretty-printed JSON, used for diagnostics
    pub fn to_pretty_string(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pretty_string())
    }
}

impl FromIterator<(String, Value)> for Doc {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Doc(iter.into_iter().collect())
    }
}

impl IntoIterator for Doc {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl TryFrom<serde_json::Value> for Doc {
    type Error = DocumentError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Doc::from_value(value)
    }
}

/// Decode raw response bytes into a document
///
/// # Errors
///
/// Returns `DocumentError::Decode` if the bytes are not a JSON object.
pub fn decode(bytes: &[u8]) -> Result<Doc, DocumentError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    Doc::from_value(value)
}

/// Encode a document into request bytes
///
/// # Errors
///
/// Returns `DocumentError::Decode` if serialization fails.
pub fn encode(doc: &Doc) -> Result<Vec<u8>, DocumentError> {
    Ok(serde_json::to_vec(doc)?)
}

// Comprehensive tests in separate module
#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;
