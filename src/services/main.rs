use crate::domain::client::Client;
use crate::domain::list::ListEvent;
use crate::dto::main::ClientListPage;
use crate::forms::main::AddClientForm;
use crate::registry::{ViewId, ViewRegistry};
use crate::repository::ClientWriter;
use crate::services::{ServiceError, ServiceResult};

/// Validates the add-client form, creates the client remotely and closes the
/// panel of the view. The list itself is left untouched.
pub async fn add_client<R>(
    repo: &R,
    registry: &ViewRegistry,
    id: ViewId,
    form: AddClientForm,
) -> ServiceResult<(Client, ClientListPage)>
where
    R: ClientWriter + ?Sized,
{
    if registry.get(id).is_none() {
        return Err(ServiceError::NotFound);
    }

    let new_client = form.to_new_client().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    let client = repo.create_client(&new_client).await.map_err(|err| {
        log::error!("Failed to add a client: {err}");
        ServiceError::from(err)
    })?;

    let state = registry
        .apply(id, ListEvent::PanelClosed)
        .ok_or(ServiceError::NotFound)?;
    Ok((client, ClientListPage::new(id, &state)))
}
