//! Health check handler

use actix_web::{web, HttpResponse};
use serde_json::json;

/// GET /api/v1/health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "pabx-console",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
