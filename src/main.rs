//! PABX Console Server
//!
//! Serves the administration console API: session, navigation, list pages,
//! modal forms, CDR selection, live call durations and simulated exports.

use actix_cors::Cors;
use actix_web::{http::header, middleware, web, App, HttpResponse, HttpServer};
use pabx_api::configure_api;
use pabx_auth::{FileSessionStore, SessionContext};
use pabx_core::AppConfig;
use pabx_services::{Dashboard, NotificationCenter};
use std::env;
use std::io;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging
fn init_tracing() {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "pabx_console={},pabx_api={},pabx_auth={},pabx_services={},actix_web=info",
            log_level, log_level, log_level, log_level
        ))
    });

    let registry = tracing_subscriber::registry().with(env_filter);
    if env::var("LOG_FORMAT").map(|f| f == "json").unwrap_or(false) {
        registry.with(fmt::layer().json()).init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true),
            )
            .init();
    }
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "error": error,
        "message": message,
        "status": 400,
    }))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    info!("Starting PABX Console v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // One notification queue shared by the session and every view
    let notifications = Arc::new(NotificationCenter::new(config.ui.notification_capacity));

    let session_store = Arc::new(FileSessionStore::new(config.session.store_path.clone()));
    let session = Arc::new(SessionContext::restore(
        session_store,
        config.session.key.clone(),
        notifications.clone(),
    ));

    let dashboard = Arc::new(Dashboard::new(&config, notifications));

    let bind_addr = config.server_addr();
    let workers = config.server.workers;
    let cors_origins = config.server.cors_origins.clone();
    info!(
        "Starting HTTP server on {} with {} workers",
        bind_addr, workers
    );

    HttpServer::new(move || {
        let cors_origins_inner = cors_origins.clone();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _req_head| {
                let origins: Vec<&str> = cors_origins_inner.split(',').collect();
                if let Ok(origin_str) = origin.to_str() {
                    origins.iter().any(|o| o.trim() == origin_str)
                } else {
                    false
                }
            })
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(session.clone()))
            .app_data(web::Data::new(dashboard.clone()))
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                let message = err.to_string();
                actix_web::error::InternalError::from_response(
                    err,
                    bad_request("invalid_query", message),
                )
                .into()
            }))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let message = err.to_string();
                actix_web::error::InternalError::from_response(
                    err,
                    bad_request("invalid_body", message),
                )
                .into()
            }))
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_api)
            .route(
                "/",
                web::get().to(|| async {
                    HttpResponse::Found()
                        .append_header(("Location", "/api/v1/health"))
                        .finish()
                }),
            )
    })
    .workers(workers)
    .bind(&bind_addr)?
    .run()
    .await
}
