//! Orchestrates page loads for the clients list.
//!
//! Every operation drives a list stored in a [`ViewRegistry`]. The registry
//! lock is never held across the remote call.

use crate::domain::list::{ListEvent, PageRequest};
use crate::dto::main::ClientListPage;
use crate::registry::{ViewId, ViewRegistry};
use crate::repository::{ClientListQuery, ClientReader};
use crate::services::{ServiceError, ServiceResult};

/// Performs the remote call for `request` and returns the completion event.
///
/// Failures are logged and reported as [`ListEvent::LoadFailed`]; they never
/// reach the caller as errors.
pub async fn fetch_page<R>(repo: &R, request: PageRequest) -> ListEvent
where
    R: ClientReader + ?Sized,
{
    match repo.list_clients(ClientListQuery::from(&request)).await {
        Ok(page) => ListEvent::PageLoaded { request, page },
        Err(err) => {
            log::error!(
                "Error fetching clients page {} for {:?}: {err}",
                request.page,
                request.query
            );
            ListEvent::LoadFailed {
                request,
                reason: err.to_string(),
            }
        }
    }
}

/// Mounts a new view for the index page.
pub fn mount_view(registry: &ViewRegistry, query: Option<String>) -> ClientListPage {
    let (id, state) = registry.mount(query.unwrap_or_default());
    log::debug!("Mounted list view {id}");
    ClientListPage::new(id, &state)
}

/// Current page data of a mounted view.
pub fn show_view(registry: &ViewRegistry, id: ViewId) -> ServiceResult<ClientListPage> {
    let state = registry.get(id).ok_or(ServiceError::NotFound)?;
    Ok(ClientListPage::new(id, &state))
}

/// Loads the next page of a mounted view.
pub async fn load_next_page<R>(
    repo: &R,
    registry: &ViewRegistry,
    id: ViewId,
) -> ServiceResult<ClientListPage>
where
    R: ClientReader + ?Sized,
{
    let Some(request) = registry.begin_load(id).ok_or(ServiceError::NotFound)? else {
        return show_view(registry, id);
    };

    let event = fetch_page(repo, request).await;
    // The view may have been evicted while the request was in flight.
    let state = registry.apply(id, event).ok_or(ServiceError::NotFound)?;
    Ok(ClientListPage::new(id, &state))
}

/// Changes the search query of a mounted view.
pub fn set_query(
    registry: &ViewRegistry,
    id: ViewId,
    query: String,
) -> ServiceResult<ClientListPage> {
    let state = registry
        .apply(id, ListEvent::QueryChanged(query))
        .ok_or(ServiceError::NotFound)?;
    Ok(ClientListPage::new(id, &state))
}

/// Opens or closes the create-client panel of a mounted view.
pub fn set_panel_open(
    registry: &ViewRegistry,
    id: ViewId,
    open: bool,
) -> ServiceResult<ClientListPage> {
    let event = if open {
        ListEvent::PanelOpened
    } else {
        ListEvent::PanelClosed
    };
    let state = registry.apply(id, event).ok_or(ServiceError::NotFound)?;
    Ok(ClientListPage::new(id, &state))
}
