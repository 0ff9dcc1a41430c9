use actix_web::{Responder, get, post, web};
use serde::Deserialize;
use tera::{Context, Tera};

use crate::dto::main::ClientListPage;
use crate::forms::main::AddClientForm;
use crate::registry::{ViewId, ViewRegistry};
use crate::repository::ClientRepository;
use crate::routes::{alert_level_to_str, error_response, redirect, render_template};
use crate::services::ServiceError;
use crate::services::list as list_service;
use crate::services::main as main_service;

#[derive(Deserialize)]
struct SearchQueryParams {
    q: Option<String>,
}

fn page_context(page: &ClientListPage) -> Context {
    let mut context = Context::new();
    context.insert("page", page);
    context
}

#[get("/")]
pub async fn redirect_index() -> impl Responder {
    redirect("/clients")
}

#[get("/clients")]
pub async fn show_index(
    params: web::Query<SearchQueryParams>,
    registry: web::Data<ViewRegistry>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = list_service::mount_view(&registry, params.into_inner().q);
    render_template(&tera, "clients/index.html", &page_context(&page))
}

#[get("/clients/{view_id}/more")]
pub async fn load_more(
    view_id: web::Path<ViewId>,
    repo: web::Data<dyn ClientRepository>,
    registry: web::Data<ViewRegistry>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match list_service::load_next_page(repo.get_ref(), &registry, view_id.into_inner()).await {
        Ok(page) => render_template(&tera, "clients/list.html", &page_context(&page)),
        Err(err) => error_response(&err),
    }
}

#[get("/clients/{view_id}/search")]
pub async fn search(
    view_id: web::Path<ViewId>,
    params: web::Query<SearchQueryParams>,
    registry: web::Data<ViewRegistry>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = params.into_inner().q.unwrap_or_default();
    match list_service::set_query(&registry, view_id.into_inner(), query) {
        Ok(page) => render_template(&tera, "clients/list.html", &page_context(&page)),
        Err(err) => error_response(&err),
    }
}

#[get("/clients/{view_id}/panel")]
pub async fn open_panel(
    view_id: web::Path<ViewId>,
    registry: web::Data<ViewRegistry>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match list_service::set_panel_open(&registry, view_id.into_inner(), true) {
        Ok(page) => render_template(&tera, "clients/panel.html", &page_context(&page)),
        Err(err) => error_response(&err),
    }
}

#[get("/clients/{view_id}/panel/close")]
pub async fn close_panel(
    view_id: web::Path<ViewId>,
    registry: web::Data<ViewRegistry>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match list_service::set_panel_open(&registry, view_id.into_inner(), false) {
        Ok(page) => render_template(&tera, "clients/panel.html", &page_context(&page)),
        Err(err) => error_response(&err),
    }
}

#[post("/clients/{view_id}/panel")]
pub async fn add_client(
    view_id: web::Path<ViewId>,
    repo: web::Data<dyn ClientRepository>,
    registry: web::Data<ViewRegistry>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<AddClientForm>,
) -> impl Responder {
    let view_id = view_id.into_inner();

    let (page, message, is_error) =
        match main_service::add_client(repo.get_ref(), &registry, view_id, form).await {
            Ok((client, page)) => (page, format!("Client {} added.", client.full_name()), false),
            Err(err @ (ServiceError::Form(_) | ServiceError::Repository(_))) => {
                match list_service::show_view(&registry, view_id) {
                    Ok(page) => (page, format!("Failed to add a client: {err}"), true),
                    Err(err) => return error_response(&err),
                }
            }
            Err(err) => return error_response(&err),
        };

    let mut context = page_context(&page);
    context.insert("alert_message", &message);
    context.insert("alert_level", alert_level_to_str(is_error));
    render_template(&tera, "clients/panel.html", &context)
}
