//! Notification handlers
//!
//! The front-end polls this endpoint and shows each returned toast once.
//! Public, so a failed login can still be reported.

use crate::dto::ApiResponse;
use actix_web::{web, HttpResponse};
use pabx_services::Dashboard;
use std::sync::Arc;

/// Take all pending notifications
///
/// GET /api/v1/notifications
pub async fn drain(dashboard: web::Data<Arc<Dashboard>>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(dashboard.notifications.drain()))
}

/// Peek at pending notifications without consuming them
///
/// GET /api/v1/notifications/pending
pub async fn pending(dashboard: web::Data<Arc<Dashboard>>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(dashboard.notifications.pending()))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notifications")
            .route("", web::get().to(drain))
            .route("/pending", web::get().to(pending)),
    );
}
