//! Integration tests for the client facade
//!
//! Tests cover:
//! - Promotion of transport documents into typed objects
//! - Default page size applied to list calls
//! - Object-tag checks on single-object responses
//! - Error propagation from the transport
//! - Configuration validation

mod common;

use async_trait::async_trait;
use notion_core::models::{Block, Doc, PaginationRequest, Parent, Property, RichText};
use notion_core::query::{
    conditions, AppendChildrenRequest, CreatePageRequest, PropertyFilter, QueryDatabaseRequest,
    SearchRequest, UpdatePageRequest,
};
use notion_core::services::{ApiError, ClientConfig, Notion, NotionApi, NotionError, Result};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory transport answering from canned documents keyed by endpoint
#[derive(Default)]
struct MockApi {
    responses: HashMap<&'static str, Doc>,
    page_sizes: Mutex<Vec<Option<u32>>>,
    bodies: Mutex<Vec<Doc>>,
}

impl MockApi {
    fn with(mut self, endpoint: &'static str, value: serde_json::Value) -> Self {
        self.responses
            .insert(endpoint, Doc::from_value(value).unwrap());
        self
    }

    fn answer(&self, endpoint: &str) -> Result<Doc> {
        self.responses.get(endpoint).cloned().ok_or_else(|| {
            NotionError::Api(ApiError {
                object: "error".into(),
                status: 404,
                code: "object_not_found".into(),
                message: format!("no canned response for {}", endpoint),
            })
        })
    }

    fn record_page(&self, pagination: Option<&PaginationRequest>) {
        self.page_sizes
            .lock()
            .unwrap()
            .push(pagination.and_then(|p| p.page_size));
    }

    fn record_body(&self, body: Doc) {
        self.bodies.lock().unwrap().push(body);
    }
}

#[async_trait]
impl NotionApi for MockApi {
    fn version(&self) -> String {
        String::new()
    }

    async fn list_users(&self, pagination: Option<&PaginationRequest>) -> Result<Doc> {
        self.record_page(pagination);
        self.answer("list_users")
    }

    async fn retrieve_user(&self, _user_id: &str) -> Result<Doc> {
        self.answer("retrieve_user")
    }

    async fn retrieve_block_children(
        &self,
        _block_id: &str,
        pagination: Option<&PaginationRequest>,
    ) -> Result<Doc> {
        self.record_page(pagination);
        self.answer("retrieve_block_children")
    }

    async fn append_block_children(
        &self,
        _block_id: &str,
        request: &AppendChildrenRequest,
    ) -> Result<Doc> {
        self.record_body(request.json());
        self.answer("append_block_children")
    }

    async fn retrieve_page(&self, _page_id: &str) -> Result<Doc> {
        self.answer("retrieve_page")
    }

    async fn create_page(&self, request: &CreatePageRequest) -> Result<Doc> {
        self.record_body(request.json());
        self.answer("create_page")
    }

    async fn update_page(&self, _page_id: &str, request: &UpdatePageRequest) -> Result<Doc> {
        self.record_body(request.json());
        self.answer("update_page")
    }

    async fn retrieve_database(&self, _database_id: &str) -> Result<Doc> {
        self.answer("retrieve_database")
    }

    async fn query_database(
        &self,
        _database_id: &str,
        request: &QueryDatabaseRequest,
    ) -> Result<Doc> {
        self.record_page(request.pagination.as_ref());
        self.record_body(request.json());
        self.answer("query_database")
    }

    async fn list_databases(&self, pagination: Option<&PaginationRequest>) -> Result<Doc> {
        self.record_page(pagination);
        self.answer("list_databases")
    }

    async fn search(&self, request: &SearchRequest) -> Result<Doc> {
        self.record_page(request.pagination.as_ref());
        self.record_body(request.json());
        self.answer("search")
    }
}

fn client(api: MockApi, config: ClientConfig) -> (Notion, Arc<MockApi>) {
    common::init_tracing();
    let api = Arc::new(api);
    let notion = Notion::new(api.clone(), config).unwrap();
    (notion, api)
}

fn page_doc(id: &str) -> serde_json::Value {
    json!({
        "object": "page",
        "id": id,
        "archived": false,
        "parent": {"type": "database_id", "database_id": "d-1"},
        "properties": {"Done": {"id": "a", "type": "checkbox", "checkbox": true}}
    })
}

// =========================================================================
// Configuration
// =========================================================================

#[test]
fn test_invalid_config_is_rejected() {
    let config = ClientConfig::default().with_page_size(500);
    let err = Notion::new(Arc::new(MockApi::default()), config).err().unwrap();
    assert!(matches!(err, NotionError::InvalidConfig(_)));
}

#[test]
fn test_api_version_falls_back_to_config() {
    let (notion, _) = client(MockApi::default(), ClientConfig::default());
    assert_eq!(notion.api_version(), "2021-05-13");
}

#[test]
fn test_facade_runs_on_a_plain_executor() {
    let api = MockApi::default().with(
        "retrieve_user",
        json!({"object": "user", "id": "u1", "type": "bot"}),
    );
    let (notion, _) = client(api, ClientConfig::default());

    let user = tokio_test::block_on(notion.retrieve_user("u1")).unwrap();
    assert!(user.is_bot());
    assert_eq!(user.email(), "");
}

// =========================================================================
// List Calls
// =========================================================================

#[tokio::test]
async fn test_default_page_size_fills_missing_pagination() {
    let api = MockApi::default().with(
        "list_users",
        json!({"object": "list", "has_more": false, "results": [
            {"object": "user", "id": "u1", "type": "person", "person": {"email": "a@b.c"}}
        ]}),
    );
    let (notion, api) = client(api, ClientConfig::default().with_page_size(20));

    let users = notion.list_users(None).await.unwrap().users().unwrap();
    assert_eq!(users[0].email(), "a@b.c");

    notion
        .list_users(Some(PaginationRequest::new().with_page_size(3)))
        .await
        .unwrap();

    assert_eq!(*api.page_sizes.lock().unwrap(), vec![Some(20), Some(3)]);
}

#[tokio::test]
async fn test_no_default_page_size_sends_none() {
    let api = MockApi::default().with("list_databases", json!({"results": []}));
    let (notion, api) = client(api, ClientConfig::default());

    let response = notion.list_databases(None).await.unwrap();
    assert!(response.databases().unwrap().is_empty());
    assert_eq!(*api.page_sizes.lock().unwrap(), vec![None]);
}

#[tokio::test]
async fn test_block_children_are_typed() {
    let api = MockApi::default().with(
        "retrieve_block_children",
        json!({"object": "list", "has_more": true, "next_cursor": "c", "results": [
            {"object": "block", "id": "b1", "type": "paragraph", "paragraph": {"text": []}},
            {"object": "block", "id": "b2", "type": "synced_block", "synced_block": {}}
        ]}),
    );
    let (notion, _) = client(api, ClientConfig::default());

    let response = notion.retrieve_block_children("page", None).await.unwrap();
    assert!(response.has_more);
    assert_eq!(response.blocks().unwrap().len(), 1);
}

#[tokio::test]
async fn test_query_database_sends_filter_and_page_size() {
    let api = MockApi::default().with(
        "query_database",
        json!({"results": [page_doc("p1"), page_doc("p2")]}),
    );
    let (notion, api) = client(api, ClientConfig::default().with_page_size(10));

    let request = QueryDatabaseRequest::new()
        .with_filter(PropertyFilter::new("Done", conditions::checkbox::equals(true)));
    let pages = notion
        .query_database("d-1", request)
        .await
        .unwrap()
        .pages()
        .unwrap();
    assert_eq!(pages.len(), 2);

    let body = api.bodies.lock().unwrap()[0].to_value();
    assert_eq!(body["page_size"], 10);
    assert_eq!(body["filter"]["checkbox"]["equals"], true);
}

#[tokio::test]
async fn test_search_keeps_explicit_pagination() {
    let api = MockApi::default().with("search", json!({"results": [page_doc("p")]}));
    let (notion, api) = client(api, ClientConfig::default().with_page_size(10));

    let request = SearchRequest::new("roadmap")
        .with_pagination(PaginationRequest::new().with_start_cursor("c1"));
    notion.search(request).await.unwrap();

    let body = api.bodies.lock().unwrap()[0].to_value();
    assert_eq!(body["start_cursor"], "c1");
    assert!(body.get("page_size").is_none());
}

// =========================================================================
// Single Objects
// =========================================================================

#[tokio::test]
async fn test_retrieve_page_promotes_properties() {
    let api = MockApi::default().with("retrieve_page", page_doc("p1"));
    let (notion, _) = client(api, ClientConfig::default());

    let page = notion.retrieve_page("p1").await.unwrap();
    assert_eq!(page.parent(), Some(Parent::Database("d-1".into())));
    assert!(matches!(page.property("Done"), Some(Property::Checkbox(_))));
}

#[tokio::test]
async fn test_object_tag_mismatch_is_document_error() {
    let api = MockApi::default().with("retrieve_database", page_doc("p1"));
    let (notion, _) = client(api, ClientConfig::default());

    let err = notion.retrieve_database("p1").await.unwrap_err();
    assert!(err.is_document_error());
    assert!(err.to_string().contains("database"));
}

#[tokio::test]
async fn test_transport_error_is_propagated() {
    let (notion, _) = client(MockApi::default(), ClientConfig::default());

    let err = notion.retrieve_user("missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(404));
}

// =========================================================================
// Writes
// =========================================================================

#[tokio::test]
async fn test_create_and_update_page() {
    let api = MockApi::default()
        .with("create_page", page_doc("new"))
        .with("update_page", page_doc("new"));
    let (notion, api) = client(api, ClientConfig::default());

    let request = CreatePageRequest::new(Parent::Database("d-1".into()))
        .with_property(Property::title("Name", vec![RichText::new("Ship it")]));
    let page = notion.create_page(&request).await.unwrap();
    assert_eq!(page.id(), "new");

    notion
        .update_page_properties("new", vec![Property::checkbox("Done", true)])
        .await
        .unwrap();

    let bodies = api.bodies.lock().unwrap();
    assert_eq!(bodies[0].to_value()["properties"]["Name"]["type"], "title");
    assert_eq!(bodies[1].to_value()["properties"]["Done"]["checkbox"], true);
}

#[tokio::test]
async fn test_append_children_returns_parent_block() {
    let api = MockApi::default().with(
        "append_block_children",
        json!({"object": "block", "id": "t", "type": "toggle", "has_children": true,
               "toggle": {"text": []}}),
    );
    let (notion, api) = client(api, ClientConfig::default());

    let parent = notion
        .append_block_children("t", vec![Block::paragraph(vec![RichText::new("x")])])
        .await
        .unwrap();
    assert!(parent.has_children());

    let body = api.bodies.lock().unwrap()[0].to_value();
    assert_eq!(body["children"][0]["paragraph"]["text"][0]["plain_text"], "x");
}
