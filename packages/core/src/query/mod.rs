//! Query Building
//!
//! Outbound filter expressions, sorts and request bodies.
//!
//! # Architecture
//!
//! - **Conditions**: a `(category, operator, value)` triple built from the
//!   per-category factory functions in [`conditions`]
//! - **Property filters**: a condition bound to a column name,
//!   `{"property": "Done", "checkbox": {"equals": true}}`
//! - **Compound filters**: an `and`/`or` list of property and compound
//!   filters; a child compound with the same operation is spliced into its
//!   parent, a child with the other operation keeps its own grouping
//! - **Requests**: typed bodies for query, search, create, update and append
//!   calls, each rendered with `json()`
//!
//! # Examples
//!
//! ```rust
//! use notion_core::query::{conditions, CompoundFilter, Filter, FilterOperation, PropertyFilter};
//!
//! let open = PropertyFilter::new("Done", conditions::checkbox::equals(false));
//! let mine = PropertyFilter::new("Owner", conditions::people::contains("u-1"));
//! let urgent = PropertyFilter::new("Priority", conditions::number::greater_than(2));
//!
//! let inner = CompoundFilter::new(FilterOperation::And, vec![mine.into(), urgent.into()]);
//! let filter = CompoundFilter::new(FilterOperation::And, vec![open.into(), inner.into()]);
//!
//! assert_eq!(filter.filters().len(), 3);
//! ```

pub mod conditions;
mod filter;
mod request;

pub use conditions::Condition;
pub use filter::{CompoundFilter, Filter, FilterOperation, PropertyFilter};
pub use request::{
    AppendChildrenRequest, CreatePageRequest, Direction, QueryDatabaseRequest, SearchRequest,
    Sort, Timestamp, UpdatePageRequest,
};

#[cfg(test)]
mod query_test;
