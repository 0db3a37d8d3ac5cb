//! Boundaries to the external services the list view consumes.
//!
//! All three are asynchronous and may fail at the transport level with a
//! [`ServiceError`]. Business failures travel inside the response instead.

use crate::query::{QueryRequest, QueryResponse};
use crate::{RecordId, ServiceError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[async_trait]
pub trait RecordQueryService: Send + Sync {
    async fn execute_query(&self, request: QueryRequest) -> Result<QueryResponse, ServiceError>;
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn search_users(&self, search_term: &str) -> Result<Vec<DirectoryUser>, ServiceError>;
}

#[async_trait]
pub trait OwnerChangeService: Send + Sync {
    async fn change_owner(
        &self,
        request: OwnerChangeRequest,
    ) -> Result<OwnerChangeResponse, ServiceError>;
}

/// A user returned by the directory search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DirectoryUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(alias = "SmallPhotoUrl")]
    pub photo_url: String,
    pub title: String,
}

impl DirectoryUser {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerChangeRequest {
    pub record_ids: Vec<RecordId>,
    pub new_owner_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnerChangeResponse {
    pub success: bool,
    pub success_count: u32,
    pub error_message: Option<String>,
}

/// The service handles a list view is wired to.
#[derive(Clone)]
pub struct ListViewServices {
    pub query: Arc<dyn RecordQueryService>,
    pub directory: Arc<dyn UserDirectory>,
    pub owner_change: Arc<dyn OwnerChangeService>,
}

impl ListViewServices {
    pub fn new(
        query: Arc<dyn RecordQueryService>,
        directory: Arc<dyn UserDirectory>,
        owner_change: Arc<dyn OwnerChangeService>,
    ) -> Self {
        Self {
            query,
            directory,
            owner_change,
        }
    }
}
