//! `reqwest` implementation of the client repository traits.

use async_trait::async_trait;
use reqwest::{Client as HttpClient, RequestBuilder, Response};

use crate::domain::client::{Client, NewClient};
use crate::domain::list::ClientPage;
use crate::dto::api::ClientsPageResponse;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};

/// Data source backed by the remote clients REST API.
#[derive(Clone)]
pub struct HttpRepository {
    http: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl HttpRepository {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self::with_client(HttpClient::new(), base_url, token)
    }

    pub fn with_client(
        http: HttpClient,
        base_url: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    fn clients_url(&self) -> String {
        format!("{}/clients/", self.base_url)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

async fn checked(response: Response) -> RepositoryResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(RepositoryError::NotFound);
    }
    let message = response.text().await.unwrap_or_default();
    Err(RepositoryError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl ClientReader for HttpRepository {
    async fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<ClientPage> {
        let page = query.page.get().to_string();
        let request = self
            .http
            .get(self.clients_url())
            .query(&[("page", page.as_str()), ("name", query.name.as_str())]);

        let response = checked(self.authorize(request).send().await?).await?;
        let body: ClientsPageResponse = response.json().await?;
        Ok(body.into())
    }
}

#[async_trait]
impl ClientWriter for HttpRepository {
    async fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        let request = self.http.post(self.clients_url()).json(new_client);
        let response = checked(self.authorize(request).send().await?).await?;
        Ok(response.json().await?)
    }
}
