//! Integration tests for the console API
//!
//! Each test builds a fresh session and dashboard over seeded data and
//! drives them through the actix service.

use actix_web::{http::StatusCode, test, web, App};
use pabx_api::configure_api;
use pabx_auth::{MemorySessionStore, SessionContext};
use pabx_core::AppConfig;
use pabx_services::{Dashboard, NotificationCenter};
use serde_json::{json, Value};
use std::sync::Arc;

fn state(config: &AppConfig) -> (Arc<SessionContext>, Arc<Dashboard>) {
    let center = Arc::new(NotificationCenter::default());
    let session = Arc::new(SessionContext::restore(
        Arc::new(MemorySessionStore::new()),
        config.session.key.clone(),
        center.clone(),
    ));
    let dashboard = Arc::new(Dashboard::new(config, center));
    (session, dashboard)
}

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.export.delay_ms = 0;
    config
}

macro_rules! app {
    ($session:expr, $dashboard:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($session.clone()))
                .app_data(web::Data::new($dashboard.clone()))
                .configure(configure_api),
        )
        .await
    };
}

macro_rules! login {
    ($app:expr, $email:expr, $password:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": $email, "password": $password }))
            .to_request();
        test::call_service(&$app, req).await
    }};
}

#[actix_web::test]
async fn test_health_is_public() {
    let (session, dashboard) = state(&test_config());
    let app = app!(session, dashboard);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_protected_pages_require_login() {
    let (session, dashboard) = state(&test_config());
    let app = app!(session, dashboard);

    for uri in ["/api/v1/agents", "/api/v1/cdrs", "/api/v1/auth/me", "/api/v1/settings"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }
}

#[actix_web::test]
async fn test_admin_login_returns_admin_menu() {
    let (session, dashboard) = state(&test_config());
    let app = app!(session, dashboard);

    let resp = login!(app, "admin@pabx.com", "admin123");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["user"]["role"], "admin");
    assert_eq!(body["data"]["redirect"], "/dashboard");

    let labels: Vec<&str> = body["data"]["navigation"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels.len(), 10);
    assert!(labels.contains(&"System Status"));

    let me = test::call_service(&app, test::TestRequest::get().uri("/api/v1/auth/me").to_request()).await;
    assert_eq!(me.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_wrong_password_reports_error_toast() {
    let (session, dashboard) = state(&test_config());
    let app = app!(session, dashboard);

    let resp = login!(app, "admin@pabx.com", "nope");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_credentials");
    assert!(session.current_user().is_none());

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/notifications").to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    let toasts = body["data"].as_array().unwrap();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0]["level"], "error");

    // drained
    assert!(dashboard.notifications.is_empty());
}

#[actix_web::test]
async fn test_logout_clears_session() {
    let (session, dashboard) = state(&test_config());
    let app = app!(session, dashboard);
    login!(app, "user@pabx.com", "user123");

    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/api/v1/auth/logout").to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["signed_out"], true);
    assert_eq!(body["data"]["redirect"], "/login");
    assert!(!session.is_authenticated());
}

#[actix_web::test]
async fn test_route_resolution() {
    let (session, dashboard) = state(&test_config());
    let app = app!(session, dashboard);

    let resolve = |path: &'static str| {
        test::TestRequest::get()
            .uri(&format!("/api/v1/routes/resolve?path={}", path))
            .to_request()
    };

    let body: Value = test::call_and_read_body_json(&app, resolve("/agents")).await;
    assert_eq!(body["data"]["action"], "redirect");
    assert_eq!(body["data"]["to"], "/login");

    login!(app, "admin@pabx.com", "admin123");

    let body: Value = test::call_and_read_body_json(&app, resolve("/agents")).await;
    assert_eq!(body["data"]["action"], "render");
    assert_eq!(body["data"]["route"], "agents");

    let body: Value = test::call_and_read_body_json(&app, resolve("/login")).await;
    assert_eq!(body["data"]["action"], "redirect");
    assert_eq!(body["data"]["to"], "/dashboard");
}

#[actix_web::test]
async fn test_agent_list_search_resets_page() {
    let (session, dashboard) = state(&test_config());
    let app = app!(session, dashboard);
    login!(app, "admin@pabx.com", "admin123");

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/v1/agents?page=2").to_request(),
    )
    .await;
    assert_eq!(body["data"]["page"], 2);
    assert_eq!(body["data"]["total_items"], 12);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/v1/agents?search=garcia").to_request(),
    )
    .await;
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["total_items"], 1);
    assert_eq!(body["data"]["items"][0]["name"], "Maria Garcia");
    assert_eq!(body["data"]["show_controls"], false);

    // query state persists between requests
    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/v1/agents?status=pause").to_request(),
    )
    .await;
    assert_eq!(body["data"]["total_items"], 0);
}

#[actix_web::test]
async fn test_agent_create_validates_and_logs_only() {
    let (session, dashboard) = state(&test_config());
    let app = app!(session, dashboard);
    login!(app, "admin@pabx.com", "admin123");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/agents")
            .set_json(json!({ "name": "", "extension": "" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "missing_fields");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/agents")
            .set_json(json!({
                "name": "Nora Diaz",
                "extension": "150",
                "callerId": "Nora",
                "password": "secret",
                "status": "online"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Agent created");

    // log-only mode leaves the list untouched
    assert_eq!(dashboard.agents.store().len(), 12);
    assert!(!dashboard.agent_modal.is_open());
}

#[actix_web::test]
async fn test_agent_edit_form_prefills() {
    let (session, dashboard) = state(&test_config());
    let app = app!(session, dashboard);
    login!(app, "admin@pabx.com", "admin123");

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/v1/agents/3/form").to_request(),
    )
    .await;
    assert_eq!(body["data"]["name"], "Ana Martinez");
    assert_eq!(body["data"]["status"], "pause");
    assert!(dashboard.agent_modal.is_open());

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/agents/99/form").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_cdr_select_all_and_delete() {
    let (session, dashboard) = state(&test_config());
    let app = app!(session, dashboard);
    login!(app, "admin@pabx.com", "admin123");

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/cdrs/selection/all")
            .set_json(json!({ "checked": true }))
            .to_request(),
    )
    .await;
    assert_eq!(body["data"]["count"], 10);
    assert_eq!(body["data"]["page_fully_selected"], true);
    assert_eq!(body["data"]["scope"], "current_page");

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::delete().uri("/api/v1/cdrs/selection").to_request(),
    )
    .await;
    assert_eq!(body["data"]["deleted"], 10);

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/v1/cdrs").to_request(),
    )
    .await;
    assert_eq!(body["data"]["total_items"], 15);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete().uri("/api/v1/cdrs/selection").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_cdr_toggle_unknown_record() {
    let (session, dashboard) = state(&test_config());
    let app = app!(session, dashboard);
    login!(app, "admin@pabx.com", "admin123");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/cdrs/selection/toggle")
            .set_json(json!({ "id": 500, "checked": true }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/cdrs/selection/toggle")
            .set_json(json!({ "id": 4, "checked": true }))
            .to_request(),
    )
    .await;
    assert_eq!(body["data"]["selected"], json!([4]));
    assert_eq!(body["data"]["page_fully_selected"], false);
}

#[actix_web::test]
async fn test_hang_up_keeps_call() {
    let (session, dashboard) = state(&test_config());
    let app = app!(session, dashboard);
    login!(app, "admin@pabx.com", "admin123");

    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/api/v1/active-calls/1/hangup").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(dashboard.active_calls.snapshot().len(), 5);
    let toast = dashboard.notifications.last().unwrap();
    assert_eq!(toast.title, "Call ended");
}

#[actix_web::test]
async fn test_export_counts_filtered_rows() {
    let (session, dashboard) = state(&test_config());
    let app = app!(session, dashboard);
    login!(app, "admin@pabx.com", "admin123");

    test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/cdrs?status=completed").to_request(),
    )
    .await;

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/export")
            .set_json(json!({ "dataset": "cdr", "format": "pdf" }))
            .to_request(),
    )
    .await;
    assert_eq!(body["data"]["records"], 15);
    assert_eq!(body["data"]["format"], "pdf");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/export")
            .set_json(json!({ "dataset": "invoices" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_settings_update() {
    let (session, dashboard) = state(&test_config());
    let app = app!(session, dashboard);
    login!(app, "admin@pabx.com", "admin123");

    let mut form = serde_json::to_value(dashboard.settings.form()).unwrap();
    form["company_name"] = json!("Acme Telecom");

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::put().uri("/api/v1/settings").set_json(&form).to_request(),
    )
    .await;
    assert_eq!(body["data"]["company_name"], "Acme Telecom");

    form["company_name"] = json!("");
    let resp = test::call_service(
        &app,
        test::TestRequest::put().uri("/api/v1/settings").set_json(&form).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(dashboard.settings.current().company_name, "Acme Telecom");
}

#[actix_web::test]
async fn test_login_email_is_compared_exactly() {
    let (session, dashboard) = state(&test_config());
    let app = app!(session, dashboard);

    let resp = login!(app, " admin@pabx.com", "admin123");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(session.current_user().is_none());

    let resp = login!(app, "admin@pabx.com", "admin123");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_agent_update_survives_reopened_form() {
    let (session, dashboard) = state(&test_config());
    let app = app!(session, dashboard);
    login!(app, "admin@pabx.com", "admin123");

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/agents/3/form").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // another client opens a blank form before the edit is saved
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/agents/form").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/v1/agents/3")
            .set_json(json!({
                "name": "Ana M.",
                "extension": "103",
                "callerId": "Ana",
                "status": "pause"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Agent updated");
    assert_eq!(body["data"]["id"], 3);
}

#[actix_web::test]
async fn test_user_rows_carry_plan_days() {
    let (session, dashboard) = state(&test_config());
    let app = app!(session, dashboard);
    login!(app, "admin@pabx.com", "admin123");

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/v1/users").to_request(),
    )
    .await;
    let items = body["data"]["items"].as_array().unwrap();
    assert!(!items.is_empty());
    for item in items {
        assert!(item["days_remaining"].is_i64(), "{}", item);
        assert!(item["plan_expired"].is_boolean(), "{}", item);
    }

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/v1/users/8").to_request(),
    )
    .await;
    assert_eq!(body["data"]["name"], "Jessica Moore");
    assert_eq!(body["data"]["plan_expired"], true);
    assert!(body["data"]["days_remaining"].as_i64().unwrap() < 0);
}
