//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::client::{Client, NewClient};
use crate::domain::list::ClientPage;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};

mock! {
    pub Repository {}

    #[async_trait]
    impl ClientReader for Repository {
        async fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<ClientPage>;
    }

    #[async_trait]
    impl ClientWriter for Repository {
        async fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    }
}
