//! Transport Boundary
//!
//! The HTTP side of the client lives outside this crate. A transport
//! implements [`NotionApi`]: it sends the request body it is given, reads the
//! response, turns error bodies into [`NotionError::Api`](crate::services::NotionError)
//! and hands back the decoded response object as a [`Doc`]. Promoting that
//! document into typed objects is left to the facade.

use crate::models::{Doc, PaginationRequest};
use crate::query::{
    AppendChildrenRequest, CreatePageRequest, QueryDatabaseRequest, SearchRequest,
    UpdatePageRequest,
};
use crate::services::error::Result;
use async_trait::async_trait;

/// Operations a transport provides, one per endpoint
#[async_trait]
pub trait NotionApi: Send + Sync {
    /// API version the transport speaks, sent as `Notion-Version`
    fn version(&self) -> String;

    /// `GET /v1/users`
    async fn list_users(&self, pagination: Option<&PaginationRequest>) -> Result<Doc>;

    /// `GET /v1/users/{id}`
    async fn retrieve_user(&self, user_id: &str) -> Result<Doc>;

    /// `GET /v1/blocks/{id}/children`
    async fn retrieve_block_children(
        &self,
        block_id: &str,
        pagination: Option<&PaginationRequest>,
    ) -> Result<Doc>;

    /// `PATCH /v1/blocks/{id}/children`
    async fn append_block_children(
        &self,
        block_id: &str,
        request: &AppendChildrenRequest,
    ) -> Result<Doc>;

    /// `GET /v1/pages/{id}`
    async fn retrieve_page(&self, page_id: &str) -> Result<Doc>;

    /// `POST /v1/pages`
    async fn create_page(&self, request: &CreatePageRequest) -> Result<Doc>;

    /// `PATCH /v1/pages/{id}`
    async fn update_page(&self, page_id: &str, request: &UpdatePageRequest) -> Result<Doc>;

    /// `GET /v1/databases/{id}`
    async fn retrieve_database(&self, database_id: &str) -> Result<Doc>;

    /// `POST /v1/databases/{id}/query`
    async fn query_database(
        &self,
        database_id: &str,
        request: &QueryDatabaseRequest,
    ) -> Result<Doc>;

    /// `GET /v1/databases`
    async fn list_databases(&self, pagination: Option<&PaginationRequest>) -> Result<Doc>;

    /// `POST /v1/search`
    async fn search(&self, request: &SearchRequest) -> Result<Doc>;
}
