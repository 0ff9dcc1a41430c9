//! Wire payloads exchanged with the remote clients API.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::client::Client;
use crate::domain::list::ClientPage;

/// Response body of `GET /clients/?page=&name=`.
#[derive(Debug, Deserialize)]
pub struct ClientsPageResponse {
    /// Page of clients requested by the caller.
    pub data: Vec<Client>,
    /// Total number of clients matching the filter.
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    /// Next page marker; any falsy value means the listing is exhausted.
    #[serde(rename = "nextPage", default)]
    pub next_page: Value,
}

/// Mirrors how the API marks the last page: `null`, `false`, `0`, `""` or a
/// missing field all mean "no next page".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl From<ClientsPageResponse> for ClientPage {
    fn from(response: ClientsPageResponse) -> Self {
        Self {
            has_next: is_truthy(&response.next_page),
            clients: response.data,
            total_count: response.total_count,
        }
    }
}
