//! Request bodies
//!
//! Typed bodies for the write and query calls. The transport only needs
//! `json()` and the path parameters it already holds.

use crate::models::{Block, Doc, ObjectKind, PaginationRequest, Parent, Property, Value};
use crate::query::Filter;
use serde::{Deserialize, Serialize};

/// Timestamp a sort can order by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timestamp {
    CreatedTime,
    LastEditedTime,
}

impl Timestamp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedTime => "created_time",
            Self::LastEditedTime => "last_edited_time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Sort by a column or by a timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    #[serde(default)]
    pub direction: Direction,
}

impl Sort {
    pub fn by_property(property: impl Into<String>, direction: Direction) -> Self {
        Self {
            property: Some(property.into()),
            timestamp: None,
            direction,
        }
    }

    pub fn by_timestamp(timestamp: Timestamp, direction: Direction) -> Self {
        Self {
            property: None,
            timestamp: Some(timestamp),
            direction,
        }
    }

    pub fn json(&self) -> Doc {
        let mut doc = Doc::new().with("direction", self.direction.as_str());
        if let Some(property) = &self.property {
            doc.insert("property", property.clone());
        }
        if let Some(timestamp) = self.timestamp {
            doc.insert("timestamp", timestamp.as_str());
        }
        doc
    }
}

/// Body of `POST /v1/databases/{id}/query`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryDatabaseRequest {
    pub pagination: Option<PaginationRequest>,
    pub filter: Option<Filter>,
    pub sorts: Vec<Sort>,
}

impl QueryDatabaseRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: impl Into<Filter>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sorts.push(sort);
        self
    }

    pub fn with_pagination(mut self, pagination: PaginationRequest) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn json(&self) -> Doc {
        let mut body = pagination_body(self.pagination.as_ref());
        if let Some(filter) = &self.filter {
            body.insert("filter", filter.json().clone());
        }
        if !self.sorts.is_empty() {
            let sorts: Vec<Doc> = self.sorts.iter().map(Sort::json).collect();
            body.insert("sorts", sorts);
        }
        body
    }
}

/// Body of `POST /v1/search`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    pub query: Option<String>,
    pub pagination: Option<PaginationRequest>,
    /// Restrict results to pages or databases
    pub object: Option<ObjectKind>,
    /// Only `last_edited_time` is accepted by the service
    pub sort: Option<Sort>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn with_object(mut self, object: ObjectKind) -> Self {
        self.object = Some(object);
        self
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_pagination(mut self, pagination: PaginationRequest) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn json(&self) -> Doc {
        let mut body = pagination_body(self.pagination.as_ref());
        if let Some(query) = self.query.as_deref().filter(|q| !q.trim().is_empty()) {
            body.insert("query", query);
        }
        if let Some(object) = self.object {
            let filter = Doc::new()
                .with("property", "object")
                .with("value", object.as_str());
            body.insert("filter", filter);
        }
        if let Some(sort) = &self.sort {
            let mut doc = Doc::new().with("direction", sort.direction.as_str());
            if let Some(timestamp) = sort.timestamp {
                doc.insert("timestamp", timestamp.as_str());
            }
            body.insert("sort", doc);
        }
        body
    }
}

/// Body of `POST /v1/pages`
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: Vec<Property>,
    pub children: Vec<Block>,
}

impl CreatePageRequest {
    pub fn new(parent: Parent) -> Self {
        Self {
            parent,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_child(mut self, block: Block) -> Self {
        self.children.push(block);
        self
    }

    pub fn json(&self) -> Doc {
        let mut body = Doc::new()
            .with("parent", self.parent.to_doc())
            .with("properties", properties_by_name(&self.properties));
        if !self.children.is_empty() {
            body.insert("children", blocks(&self.children));
        }
        body
    }
}

/// Body of `PATCH /v1/pages/{id}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePageRequest {
    pub properties: Vec<Property>,
    pub archived: Option<bool>,
}

impl UpdatePageRequest {
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            properties,
            archived: None,
        }
    }

    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    pub fn json(&self) -> Doc {
        let mut body = Doc::new().with("properties", properties_by_name(&self.properties));
        if let Some(archived) = self.archived {
            body.insert("archived", archived);
        }
        body
    }
}

/// Body of `PATCH /v1/blocks/{id}/children`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppendChildrenRequest {
    pub children: Vec<Block>,
}

impl AppendChildrenRequest {
    pub fn new(children: Vec<Block>) -> Self {
        Self { children }
    }

    pub fn json(&self) -> Doc {
        Doc::new().with("children", blocks(&self.children))
    }
}

fn pagination_body(pagination: Option<&PaginationRequest>) -> Doc {
    pagination.map(PaginationRequest::json).unwrap_or_default()
}

fn properties_by_name(properties: &[Property]) -> Doc {
    properties
        .iter()
        .map(|property| {
            (
                property.name().to_string(),
                Value::Doc(property.json().clone()),
            )
        })
        .collect()
}

fn blocks(children: &[Block]) -> Vec<Doc> {
    children.iter().map(|block| block.json().clone()).collect()
}
