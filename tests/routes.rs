use std::sync::Arc;

use actix_web::{
    App,
    body::to_bytes,
    dev::ServiceResponse,
    http::{StatusCode, header},
    test, web,
};
use client_list::registry::ViewRegistry;
use client_list::repository::ClientRepository;
use client_list::repository::errors::RepositoryError;
use client_list::routes;

mod common;

use common::{ScriptedRepository, client, view_id_from};

macro_rules! test_app {
    ($repo:expr, $registry:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(common::tera()))
                .app_data(web::Data::from($repo.clone() as Arc<dyn ClientRepository>))
                .app_data($registry.clone())
                .configure(routes::configure),
        )
        .await
    };
}

async fn body_of(resp: ServiceResponse) -> String {
    let bytes = to_bytes(resp.into_body()).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

macro_rules! get {
    ($app:expr, $uri:expr) => {{
        let resp = test::call_service($app, test::TestRequest::get().uri($uri).to_request()).await;
        let status = resp.status();
        (status, body_of(resp).await)
    }};
}

fn registry() -> web::Data<ViewRegistry> {
    web::Data::new(ViewRegistry::new(16))
}

#[actix_web::test]
async fn root_redirects_to_clients() {
    let repo = Arc::new(ScriptedRepository::new());
    let registry = registry();
    let app = test_app!(repo, registry);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/clients");
}

#[actix_web::test]
async fn index_mounts_a_view_without_fetching() {
    let repo = Arc::new(ScriptedRepository::new());
    let registry = registry();
    let app = test_app!(repo, registry);

    let (status, body) = get!(&app, "/clients?q=Ada");
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Add New Client"));
    assert!(body.contains("Search Clients..."));
    assert!(body.contains("value=\"Ada\""));
    assert!(body.contains("hx-trigger=\"revealed\""));
    assert_eq!(registry.len(), 1);
    assert!(repo.queries().is_empty());
}

#[actix_web::test]
async fn scrolling_appends_pages_until_exhausted() {
    let repo = Arc::new(ScriptedRepository::new());
    repo.push_page(
        vec![client("Ada", "Lovelace"), client("Alan", "Turing")],
        5,
        true,
    );
    repo.push_page(vec![client("Grace", "Hopper")], 5, false);
    let registry = registry();
    let app = test_app!(repo, registry);

    let (_, index) = get!(&app, "/clients");
    let view_id = view_id_from(&index);

    let (status, body) = get!(&app, &format!("/clients/{view_id}/more"));
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("5 Clients"));
    assert!(body.contains("Ada Lovelace"));
    assert!(body.contains("ada@example.com (Work)"));
    assert!(body.contains("+15550001 (Mobile)"));
    assert!(body.contains("hx-trigger=\"revealed\""));

    let (_, body) = get!(&app, &format!("/clients/{view_id}/more"));
    let ada = body.find("Ada Lovelace").unwrap();
    let grace = body.find("Grace Hopper").unwrap();
    assert!(ada < grace);
    assert!(!body.contains("hx-trigger=\"revealed\""));

    // Exhausted lists do not reach the data source again.
    let (status, _) = get!(&app, &format!("/clients/{view_id}/more"));
    assert_eq!(status, StatusCode::OK);

    let pages: Vec<u32> = repo.queries().iter().map(|q| q.page.get()).collect();
    assert_eq!(pages, [1, 2]);
    assert!(repo.queries().iter().all(|q| q.name.is_empty()));
}

#[actix_web::test]
async fn search_resets_the_list_and_restarts_pagination() {
    let repo = Arc::new(ScriptedRepository::new());
    repo.push_page(vec![client("Ada", "Lovelace")], 3, true);
    repo.push_page(vec![client("Tom", "Jones")], 1, false);
    let registry = registry();
    let app = test_app!(repo, registry);

    let (_, index) = get!(&app, "/clients");
    let view_id = view_id_from(&index);
    get!(&app, &format!("/clients/{view_id}/more"));

    let (status, body) = get!(&app, &format!("/clients/{view_id}/search?q=Jones"));
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("Ada Lovelace"));
    assert!(!body.contains("3 Clients"));
    assert!(body.contains("hx-trigger=\"revealed\""));

    let (_, body) = get!(&app, &format!("/clients/{view_id}/more"));
    assert!(body.contains("Tom Jones"));

    let last = repo.queries().pop().unwrap();
    assert_eq!(last.page.get(), 1);
    assert_eq!(last.name, "Jones");
}

#[actix_web::test]
async fn zero_results_render_the_empty_state() {
    let repo = Arc::new(ScriptedRepository::new());
    repo.push_page(vec![], 0, true);
    let registry = registry();
    let app = test_app!(repo, registry);

    let (_, index) = get!(&app, "/clients");
    let view_id = view_id_from(&index);

    let (_, body) = get!(&app, &format!("/clients/{view_id}/more"));
    assert!(body.contains("You have No clients"));
    assert!(body.contains("Add a new client to begin"));
    assert!(!body.contains("hx-trigger=\"revealed\""));
    assert!(!body.contains("client-row"));
}

#[actix_web::test]
async fn failed_load_is_silent_and_skips_the_page() {
    let repo = Arc::new(ScriptedRepository::new());
    repo.push_error(RepositoryError::ConnectionError("refused".into()));
    repo.push_page(vec![client("Ada", "Lovelace")], 4, true);
    let registry = registry();
    let app = test_app!(repo, registry);

    let (_, index) = get!(&app, "/clients");
    let view_id = view_id_from(&index);

    let (status, body) = get!(&app, &format!("/clients/{view_id}/more"));
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("hx-trigger=\"revealed\""));
    assert!(!body.contains("client-row"));

    let (_, body) = get!(&app, &format!("/clients/{view_id}/more"));
    assert!(body.contains("Ada Lovelace"));

    let pages: Vec<u32> = repo.queries().iter().map(|q| q.page.get()).collect();
    assert_eq!(pages, [1, 2]);
}

#[actix_web::test]
async fn unknown_view_is_not_found() {
    let repo = Arc::new(ScriptedRepository::new());
    let registry = registry();
    let app = test_app!(repo, registry);

    let unknown = "00000000-0000-4000-8000-000000000000";
    let (status, _) = get!(&app, &format!("/clients/{unknown}/more"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get!(&app, &format!("/clients/{unknown}/panel"));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn panel_opens_and_closes() {
    let repo = Arc::new(ScriptedRepository::new());
    let registry = registry();
    let app = test_app!(repo, registry);

    let (_, index) = get!(&app, "/clients");
    assert!(!index.contains("legal_first_name"));
    let view_id = view_id_from(&index);

    let (status, body) = get!(&app, &format!("/clients/{view_id}/panel"));
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("side-panel open"));
    assert!(body.contains("name=\"legal_first_name\""));

    let (_, body) = get!(&app, &format!("/clients/{view_id}/panel/close"));
    assert!(!body.contains("side-panel open"));
    assert!(!body.contains("legal_first_name"));
    assert!(repo.queries().is_empty());
}

#[actix_web::test]
async fn add_client_submits_and_closes_the_panel() {
    let repo = Arc::new(ScriptedRepository::new());
    let registry = registry();
    let app = test_app!(repo, registry);

    let (_, index) = get!(&app, "/clients");
    let view_id = view_id_from(&index);
    get!(&app, &format!("/clients/{view_id}/panel"));

    let req = test::TestRequest::post()
        .uri(&format!("/clients/{view_id}/panel"))
        .set_form([
            ("legal_first_name", "Ada"),
            ("legal_last_name", "Lovelace"),
            ("client_type", "Individual"),
            ("relationship", "Primary"),
            ("email", ""),
            ("phone", "+15550001"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_of(resp).await;
    assert!(body.contains("Client Ada Lovelace added."));
    assert!(!body.contains("side-panel open"));

    let created = repo.created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].contact.phones[0].phone_number, "+15550001");
    // The list is not refreshed by a creation.
    assert!(repo.queries().is_empty());
}

#[actix_web::test]
async fn invalid_client_form_keeps_the_panel_open() {
    let repo = Arc::new(ScriptedRepository::new());
    let registry = registry();
    let app = test_app!(repo, registry);

    let (_, index) = get!(&app, "/clients");
    let view_id = view_id_from(&index);
    get!(&app, &format!("/clients/{view_id}/panel"));

    let req = test::TestRequest::post()
        .uri(&format!("/clients/{view_id}/panel"))
        .set_form([
            ("legal_first_name", "Ada"),
            ("legal_last_name", ""),
            ("client_type", "Individual"),
            ("relationship", "Primary"),
        ])
        .to_request();
    let body = body_of(test::call_service(&app, req).await).await;
    assert!(body.contains("Failed to add a client"));
    assert!(body.contains("side-panel open"));
    assert!(repo.created().is_empty());
}
