//! Data Models
//!
//! This module contains the document model every API object is read from and
//! written to:
//!
//! - `Doc` / `Value` - Generic key/value document with forgiving typed reads
//! - `Catalog` - Discriminator catalogs and the assignment protocol
//! - `Block`, `Property`, `Configuration` - Closed sums of typed wrappers
//! - `RichTextContent` / `ChildrenContent` - Capabilities shared by wrappers
//! - `Page`, `Database`, `User` - Top-level objects
//! - `PaginationRequest` / `PaginationResponse` - List envelopes
//!
//! Every typed wrapper owns exactly one `Doc` and reads and writes through it,
//! so `json()` is always the wire form of the wrapper.

mod block;
mod capability;
mod common;
mod configuration;
mod database;
mod doc;
mod error;
mod page;
mod pagination;
mod property;
pub mod registry;
mod rich_text;
pub mod time;
mod user;
mod value;

pub use block::{
    Block, BlockType, ChildPageBlock, ChildrenBlock, CustomBlock, RichTextBlock, ToDoBlock,
};
pub use capability::{ChildrenContent, RichTextContent, Wrapper};
pub use common::{
    Annotations, Color, DateRange, Equation, FileRef, Link, ObjectKind, SelectOption, Text,
};
pub use configuration::{
    BaseConfiguration, Configuration, ConfigurationType, FormulaConfiguration,
    NumberConfiguration, SelectConfiguration,
};
pub use database::Database;
pub use doc::{decode, encode, Doc};
pub use error::DocumentError;
pub use page::{Page, Parent};
pub use pagination::{PaginationRequest, PaginationResponse};
pub use property::{
    BaseProperty, CheckboxProperty, DateProperty, FilesProperty, FormulaProperty, FormulaValue,
    MultiSelectProperty, NumberProperty, PeopleProperty, Property, PropertyType,
    RichTextProperty, SelectProperty, StringProperty,
};
pub use registry::Catalog;
pub use rich_text::{decode_runs, Mention, RichText, RichTextType};
pub use time::{format_timestamp, parse_timestamp};
pub use user::{User, UserType};
pub use value::Value;
