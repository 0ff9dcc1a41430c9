//! HTTP handlers and rendering helpers.

use actix_web::{HttpResponse, http::header, web};
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod main;

/// Registers every route of the clients list.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::redirect_index)
        .service(main::show_index)
        .service(main::load_more)
        .service(main::search)
        .service(main::open_panel)
        .service(main::close_panel)
        .service(main::add_client);
}

/// Renders `template` with `context`, answering 500 when rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Maps a service error onto a bare HTTP response.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Form(_) => HttpResponse::BadRequest().finish(),
        ServiceError::Repository(_) => {
            log::error!("Request failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Bootstrap-like level names used by the templates for alerts.
pub fn alert_level_to_str(is_error: bool) -> &'static str {
    if is_error { "danger" } else { "success" }
}
