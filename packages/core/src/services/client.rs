//! Client Facade
//!
//! [`Notion`] sits between callers and a [`NotionApi`] transport. It fills in
//! the default page size, forwards the call and promotes the returned
//! document into the typed model.
//!
//! # Examples
//!
//! ```rust,no_run
//! use notion_core::services::{ClientConfig, Notion, NotionApi};
//! use std::sync::Arc;
//!
//! # async fn example(transport: Arc<dyn NotionApi>) -> notion_core::services::Result<()> {
//! let notion = Notion::new(transport, ClientConfig::default().with_page_size(50))?;
//!
//! let children = notion.retrieve_block_children("page-id", None).await?;
//! for block in children.blocks()? {
//!     println!("{}", block.block_type());
//! }
//! # Ok(())
//! # }
//! ```

use crate::models::{
    Block, Database, Doc, DocumentError, ObjectKind, Page, PaginationRequest, PaginationResponse,
    Property, User,
};
use crate::query::{
    AppendChildrenRequest, CreatePageRequest, QueryDatabaseRequest, SearchRequest,
    UpdatePageRequest,
};
use crate::services::api::NotionApi;
use crate::services::config::ClientConfig;
use crate::services::error::{NotionError, Result};
use std::sync::Arc;

/// Typed entry point over a transport
#[derive(Clone)]
pub struct Notion {
    api: Arc<dyn NotionApi>,
    config: ClientConfig,
}

impl Notion {
    /// # Errors
    ///
    /// Returns `NotionError::InvalidConfig` if the configuration does not validate.
    pub fn new(api: Arc<dyn NotionApi>, config: ClientConfig) -> Result<Self> {
        config.validate().map_err(NotionError::invalid_config)?;
        Ok(Self { api, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Version reported by the transport, or the configured one if it reports none
    pub fn api_version(&self) -> String {
        let version = self.api.version();
        if version.is_empty() {
            self.config.api_version.clone()
        } else {
            version
        }
    }

    pub async fn list_users(
        &self,
        pagination: Option<PaginationRequest>,
    ) -> Result<PaginationResponse> {
        let pagination = self.paginate(pagination);
        tracing::debug!("Listing users");
        let doc = self.api.list_users(pagination.as_ref()).await?;
        list(&doc)
    }

    pub async fn retrieve_user(&self, user_id: &str) -> Result<User> {
        tracing::debug!("Retrieving user {}", user_id);
        let doc = self.api.retrieve_user(user_id).await?;
        expect_object(&doc, ObjectKind::User)?;
        Ok(User::from_doc(doc))
    }

    pub async fn retrieve_block_children(
        &self,
        block_id: &str,
        pagination: Option<PaginationRequest>,
    ) -> Result<PaginationResponse> {
        let pagination = self.paginate(pagination);
        tracing::debug!("Retrieving children of block {}", block_id);
        let doc = self
            .api
            .retrieve_block_children(block_id, pagination.as_ref())
            .await?;
        list(&doc)
    }

    /// Append blocks and return the updated parent block
    pub async fn append_block_children(&self, block_id: &str, children: Vec<Block>) -> Result<Block> {
        tracing::debug!("Appending {} children to block {}", children.len(), block_id);
        let request = AppendChildrenRequest::new(children);
        let doc = self.api.append_block_children(block_id, &request).await?;
        Ok(Block::assign(doc)?)
    }

    pub async fn retrieve_page(&self, page_id: &str) -> Result<Page> {
        tracing::debug!("Retrieving page {}", page_id);
        let doc = self.api.retrieve_page(page_id).await?;
        expect_object(&doc, ObjectKind::Page)?;
        Ok(Page::from_doc(doc))
    }

    pub async fn create_page(&self, request: &CreatePageRequest) -> Result<Page> {
        tracing::debug!(
            "Creating page under {} {}",
            request.parent.type_name(),
            request.parent.id()
        );
        let doc = self.api.create_page(request).await?;
        expect_object(&doc, ObjectKind::Page)?;
        Ok(Page::from_doc(doc))
    }

    pub async fn update_page(&self, page_id: &str, request: &UpdatePageRequest) -> Result<Page> {
        tracing::debug!("Updating page {}", page_id);
        let doc = self.api.update_page(page_id, request).await?;
        expect_object(&doc, ObjectKind::Page)?;
        Ok(Page::from_doc(doc))
    }

    /// Shorthand for [`Notion::update_page`] with properties only
    pub async fn update_page_properties(
        &self,
        page_id: &str,
        properties: Vec<Property>,
    ) -> Result<Page> {
        self.update_page(page_id, &UpdatePageRequest::new(properties))
            .await
    }

    pub async fn retrieve_database(&self, database_id: &str) -> Result<Database> {
        tracing::debug!("Retrieving database {}", database_id);
        let doc = self.api.retrieve_database(database_id).await?;
        expect_object(&doc, ObjectKind::Database)?;
        Ok(Database::from_doc(doc))
    }

    pub async fn query_database(
        &self,
        database_id: &str,
        mut request: QueryDatabaseRequest,
    ) -> Result<PaginationResponse> {
        request.pagination = self.paginate(request.pagination);
        tracing::debug!("Querying database {}", database_id);
        let doc = self.api.query_database(database_id, &request).await?;
        list(&doc)
    }

    pub async fn list_databases(
        &self,
        pagination: Option<PaginationRequest>,
    ) -> Result<PaginationResponse> {
        let pagination = self.paginate(pagination);
        tracing::debug!("Listing databases");
        let doc = self.api.list_databases(pagination.as_ref()).await?;
        list(&doc)
    }

    pub async fn search(&self, mut request: SearchRequest) -> Result<PaginationResponse> {
        request.pagination = self.paginate(request.pagination);
        tracing::debug!("Searching for {:?}", request.query);
        let doc = self.api.search(&request).await?;
        list(&doc)
    }

    fn paginate(&self, pagination: Option<PaginationRequest>) -> Option<PaginationRequest> {
        match (pagination, self.config.default_page_size) {
            (Some(request), _) => Some(request),
            (None, Some(size)) => Some(PaginationRequest::new().with_page_size(size)),
            (None, None) => None,
        }
    }
}

fn list(doc: &Doc) -> Result<PaginationResponse> {
    Ok(PaginationResponse::from_doc(doc)?)
}

fn expect_object(doc: &Doc, kind: ObjectKind) -> Result<()> {
    let object = doc.get_string("object");
    if object != kind.as_str() {
        tracing::warn!("Expected a {} object, got '{}'", kind, object);
        return Err(DocumentError::type_mismatch(kind.as_str(), object).into());
    }
    Ok(())
}
