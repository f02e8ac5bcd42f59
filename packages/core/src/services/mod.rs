//! Client Services
//!
//! This module contains the client-facing layer over the document model:
//!
//! - `ClientConfig` - Endpoint, API version and paging defaults
//! - `NotionApi` - Transport boundary, one async method per endpoint
//! - `Notion` - Facade that forwards calls and promotes responses into typed objects
//! - `NotionError` / `ApiError` - Errors reported by the service or while decoding
//!
//! No HTTP is performed here; a transport crate implements `NotionApi`.

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use api::NotionApi;
pub use client::Notion;
pub use config::ClientConfig;
pub use error::{ApiError, NotionError, Result};
