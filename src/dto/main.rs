//! View models rendered by the `clients/*.html` templates.

use serde::Serialize;

use crate::domain::client::Client;
use crate::domain::list::ListState;
use crate::registry::ViewId;

/// A contact value with its type annotation, e.g. `ada@example.com (Work)`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LabeledValue {
    pub value: String,
    pub kind: String,
}

/// One entry of the rendered client list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClientRow {
    pub detail_path: String,
    pub name: String,
    pub emails: Vec<LabeledValue>,
    pub phones: Vec<LabeledValue>,
    pub client_type: String,
    pub relationship: String,
}

impl From<&Client> for ClientRow {
    fn from(client: &Client) -> Self {
        Self {
            detail_path: client.uuid.detail_path(),
            name: client.full_name(),
            emails: client
                .contact
                .emails
                .iter()
                .map(|e| LabeledValue {
                    value: e.email.clone(),
                    kind: e.kind.clone(),
                })
                .collect(),
            phones: client
                .contact
                .phones
                .iter()
                .map(|p| LabeledValue {
                    value: p.phone_number.clone(),
                    kind: p.kind.clone(),
                })
                .collect(),
            client_type: client.client_type.clone(),
            relationship: client.contact.relationship.clone(),
        }
    }
}

/// What the list region shows for a given state.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListView {
    /// First load of a query is in flight.
    Loading,
    /// The data source reported no matching clients.
    Empty,
    Items {
        clients: Vec<ClientRow>,
        /// Render the trailing loader that requests the next page.
        show_loader: bool,
    },
}

impl From<&ListState> for ListView {
    fn from(state: &ListState) -> Self {
        match state.total_count() {
            Some(0) => ListView::Empty,
            None if state.is_loading() => ListView::Loading,
            _ => ListView::Items {
                clients: state.items().iter().map(ClientRow::from).collect(),
                show_loader: state.has_more(),
            },
        }
    }
}

/// Data required to render the list page and its fragments.
#[derive(Debug, Clone, Serialize)]
pub struct ClientListPage {
    pub view_id: String,
    pub query: String,
    /// `"{total} Clients"`, blank until the first page arrives.
    pub count_label: String,
    pub list: ListView,
    pub panel_open: bool,
}

impl ClientListPage {
    pub fn new(view_id: ViewId, state: &ListState) -> Self {
        Self {
            view_id: view_id.to_string(),
            query: state.query().to_string(),
            count_label: state
                .total_count()
                .map(|total| format!("{total} Clients"))
                .unwrap_or_default(),
            list: ListView::from(state),
            panel_open: state.is_panel_open(),
        }
    }
}
