#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use client_list::domain::client::{Client, Contact, ContactEmail, ContactPhone, NewClient};
use client_list::domain::list::ClientPage;
use client_list::domain::types::ClientUuid;
use client_list::repository::errors::{RepositoryError, RepositoryResult};
use client_list::repository::{ClientListQuery, ClientReader, ClientWriter};
use tera::Tera;

/// Data source answering with pre-recorded pages, in order.
#[derive(Default)]
pub struct ScriptedRepository {
    pages: Mutex<VecDeque<RepositoryResult<ClientPage>>>,
    queries: Mutex<Vec<ClientListQuery>>,
    created: Mutex<Vec<NewClient>>,
}

impl ScriptedRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_page(&self, clients: Vec<Client>, total_count: usize, has_next: bool) {
        self.pages.lock().unwrap().push_back(Ok(ClientPage {
            clients,
            total_count,
            has_next,
        }));
    }

    pub fn push_error(&self, err: RepositoryError) {
        self.pages.lock().unwrap().push_back(Err(err));
    }

    pub fn queries(&self) -> Vec<ClientListQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<NewClient> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClientReader for ScriptedRepository {
    async fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<ClientPage> {
        self.queries.lock().unwrap().push(query);
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RepositoryError::Unexpected("no scripted page left".into())))
    }
}

#[async_trait]
impl ClientWriter for ScriptedRepository {
    async fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        self.created.lock().unwrap().push(new_client.clone());
        Ok(Client {
            uuid: ClientUuid::new(),
            client_type: new_client.client_type.to_string(),
            contact: Contact {
                legal_first_name: new_client.contact.legal_first_name.to_string(),
                legal_last_name: new_client.contact.legal_last_name.to_string(),
                relationship: new_client.contact.relationship.to_string(),
                emails: vec![],
                phones: new_client.contact.phones.clone(),
            },
        })
    }
}

pub fn client(first: &str, last: &str) -> Client {
    Client {
        uuid: ClientUuid::new(),
        client_type: "Individual".into(),
        contact: Contact {
            legal_first_name: first.into(),
            legal_last_name: last.into(),
            relationship: "Primary".into(),
            emails: vec![ContactEmail {
                email: format!("{}@example.com", first.to_lowercase()),
                kind: "Work".into(),
            }],
            phones: vec![ContactPhone {
                phone_number: "+15550001".into(),
                kind: "Mobile".into(),
            }],
        },
    }
}

pub fn tera() -> Tera {
    Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*")).expect("templates parse")
}

/// Extracts the view id from any rendered `/clients/{id}/...` link.
pub fn view_id_from(body: &str) -> String {
    let marker = "/clients/";
    body.match_indices(marker)
        .map(|(idx, _)| &body[idx + marker.len()..])
        .find_map(|rest| {
            let candidate = rest.get(..36)?;
            rest[36..].starts_with('/').then(|| candidate.to_string())
        })
        .expect("view id in body")
}
