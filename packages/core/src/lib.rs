//! Notion Core Document Model
//!
//! This crate provides a typed object model over the tag-discriminated JSON
//! documents of the Notion API: decoding responses into blocks, page
//! properties and database configurations, and building request bodies and
//! filter expressions for outbound calls.
//!
//! # Architecture
//!
//! - **One generic document**: every object is a view over a [`models::Doc`]
//! - **Closed catalogs**: the `type` discriminator selects a variant of a sum
//!   type; unknown discriminators are errors, never defaults
//! - **Composed capabilities**: rich-text and children behavior are traits
//!   implemented by the wrappers whose payload carries those lists
//! - **Transport kept outside**: HTTP lives behind the [`services::NotionApi`] trait
//!
//! # Modules
//!
//! - [`models`] - Document, typed wrappers, pagination envelopes
//! - [`query`] - Filter conditions, compound filters, sorts, request bodies
//! - [`services`] - Client configuration, transport boundary and facade

pub mod models;
pub mod query;
pub mod services;

// Re-export commonly used types
pub use models::*;
pub use query::*;
pub use services::*;
