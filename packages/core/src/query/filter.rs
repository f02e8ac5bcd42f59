//! Property and compound filters

use crate::models::{Doc, DocumentError, Value};
use crate::query::Condition;
use std::fmt;
use std::str::FromStr;

/// Boolean operation of a compound filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperation {
    And,
    Or,
}

impl FilterOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl FromStr for FilterOperation {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            _ => Err(DocumentError::unknown_variant("filter operation", s)),
        }
    }
}

impl fmt::Display for FilterOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A condition bound to one column
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyFilter {
    json: Doc,
    condition: Condition,
}

impl PropertyFilter {
    pub fn new(property: impl Into<String>, condition: Condition) -> Self {
        let json = Doc::new()
            .with("property", property.into())
            .with(condition.category(), condition.body());
        Self { json, condition }
    }

    pub fn property(&self) -> String {
        self.json.get_string("property")
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    pub fn json(&self) -> &Doc {
        &self.json
    }
}

/// `and`/`or` list of filters
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundFilter {
    json: Doc,
    operation: FilterOperation,
}

impl CompoundFilter {
    /// Combine filters under `operation`
    ///
    /// A compound child with the same operation has its elements spliced into
    /// this list; a compound child with the other operation is kept as one
    /// nested element so its grouping survives.
    pub fn new(operation: FilterOperation, filters: Vec<Filter>) -> Self {
        let mut list: Vec<Value> = Vec::with_capacity(filters.len());
        for filter in filters {
            match filter {
                Filter::Compound(child) if child.operation == operation => {
                    list.extend(child.into_elements());
                }
                other => list.push(Value::Doc(other.into_json())),
            }
        }
        Self {
            json: Doc::new().with(operation.as_str(), list),
            operation,
        }
    }

    /// Like [`CompoundFilter::new`] with the operation given as its wire tag
    ///
    /// Returns `None` for anything but `and` or `or`.
    pub fn from_tag(operation: &str, filters: Vec<Filter>) -> Option<Self> {
        match operation.parse::<FilterOperation>() {
            Ok(operation) => Some(Self::new(operation, filters)),
            Err(e) => {
                tracing::debug!("Refusing compound filter: {}", e);
                None
            }
        }
    }

    pub fn operation(&self) -> FilterOperation {
        self.operation
    }

    /// Elements of the list, in order
    pub fn filters(&self) -> Vec<Doc> {
        self.json
            .get_doc_list(self.operation.as_str())
            .unwrap_or_default()
    }

    pub fn json(&self) -> &Doc {
        &self.json
    }

    fn into_elements(mut self) -> Vec<Value> {
        match self.json.remove(self.operation.as_str()) {
            Some(Value::List(items)) => items,
            _ => Vec::new(),
        }
    }
}

/// Any filter accepted by a database query
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Property(PropertyFilter),
    Compound(CompoundFilter),
}

impl Filter {
    pub fn json(&self) -> &Doc {
        match self {
            Filter::Property(filter) => filter.json(),
            Filter::Compound(filter) => filter.json(),
        }
    }

    pub fn into_json(self) -> Doc {
        match self {
            Filter::Property(filter) => filter.json,
            Filter::Compound(filter) => filter.json,
        }
    }
}

impl From<PropertyFilter> for Filter {
    fn from(filter: PropertyFilter) -> Self {
        Filter::Property(filter)
    }
}

impl From<CompoundFilter> for Filter {
    fn from(filter: CompoundFilter) -> Self {
        Filter::Compound(filter)
    }
}
