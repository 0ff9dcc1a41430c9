use async_trait::async_trait;

use crate::domain::client::{Client, NewClient};
use crate::domain::list::{ClientPage, PageRequest};
use crate::domain::types::PageNumber;
use crate::repository::errors::RepositoryResult;

#[cfg(feature = "server")]
pub mod client;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

#[cfg(feature = "server")]
pub use client::HttpRepository;

/// Query sent to the paginated clients endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientListQuery {
    pub page: PageNumber,
    /// Free-text name filter; sent even when empty.
    pub name: String,
}

impl ClientListQuery {
    pub fn new(page: PageNumber) -> Self {
        Self {
            page,
            name: String::new(),
        }
    }

    pub fn search(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl From<&PageRequest> for ClientListQuery {
    fn from(request: &PageRequest) -> Self {
        Self::new(request.page).search(request.query.clone())
    }
}

#[async_trait]
pub trait ClientReader: Send + Sync {
    async fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<ClientPage>;
}

#[async_trait]
pub trait ClientWriter: Send + Sync {
    async fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
}

/// Full data source used by the HTTP layer.
pub trait ClientRepository: ClientReader + ClientWriter {}

impl<T: ClientReader + ClientWriter> ClientRepository for T {}
