//! Document Model Error Types
//!
//! Errors raised while reading, promoting or mutating documents. Filter
//! construction never fails with an error value: an unusable compound filter
//! is reported as `None` so that builders stay chainable.

use thiserror::Error;

/// Document model errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    /// The `type` discriminator is missing or not part of the catalog
    #[error("Unknown {kind} variant: '{discriminator}'")]
    UnknownVariant {
        kind: &'static str,
        discriminator: String,
    },

    /// An expected nested field is absent
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A typed payload was requested from a document of another type
    #[error("Type mismatch: expected '{expected}', found '{actual}'")]
    TypeMismatch { expected: String, actual: String },

    /// Bytes or a typed target do not match the document shape
    #[error("Structural decode failure: {0}")]
    Decode(String),
}

impl DocumentError {
    /// Create an unknown variant error
    pub fn unknown_variant(kind: &'static str, discriminator: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            discriminator: discriminator.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Create a type mismatch error
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a structural decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Check if the discriminator was not recognised
    pub fn is_unknown_variant(&self) -> bool {
        matches!(self, Self::UnknownVariant { .. })
    }

    /// Check if a nested field was missing
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField(_))
    }

    /// Check if this is a structural decode failure
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
