//! Client Error Types
//!
//! Errors surfaced by the facade: failures reported by the remote service,
//! failures decoding what it returned, and transport or configuration
//! problems.

use crate::models::{decode, DocumentError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error body returned by the service
///
/// ```json
/// {"object": "error", "status": 404, "code": "object_not_found", "message": "…"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub object: String,
    pub status: u16,
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl ApiError {
    /// Decode an error body
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Decode` if the body is not an error object.
    pub fn parse(bytes: &[u8]) -> std::result::Result<Self, DocumentError> {
        decode(bytes)?.unmarshal()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.status, self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Facade errors
#[derive(Error, Debug)]
pub enum NotionError {
    /// The service answered with an error body
    #[error("API error: {0}")]
    Api(ApiError),

    /// The response did not decode into the expected document
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// The transport failed before a response was read
    #[error("Transport error: {0}")]
    Transport(String),

    /// The client configuration was rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl NotionError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Turn a non-success response body into an error
    ///
    /// Bodies that are not an error object become a transport error that
    /// keeps the status code.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        match ApiError::parse(body) {
            Ok(api) => Self::Api(api),
            Err(e) => Self::Transport(format!("HTTP {} with unreadable body: {}", status, e)),
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(api) => Some(api.status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }

    pub fn is_document_error(&self) -> bool {
        matches!(self, Self::Document(_))
    }
}

impl From<ApiError> for NotionError {
    fn from(api: ApiError) -> Self {
        Self::Api(api)
    }
}

pub type Result<T> = std::result::Result<T, NotionError>;
