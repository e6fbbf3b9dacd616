//! Dashboard, report and status handlers. All read-only.

use crate::dto::ApiResponse;
use actix_web::{web, HttpResponse};
use pabx_auth::AuthenticatedUser;
use pabx_services::Dashboard;
use std::sync::Arc;

/// GET /api/v1/dashboard/summary
pub async fn summary(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(dashboard.summary()))
}

/// Per-agent call report
///
/// GET /api/v1/reports
pub async fn agent_reports(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(dashboard.agent_reports()))
}

/// GET /api/v1/performance
pub async fn performance(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(dashboard.performance()))
}

/// GET /api/v1/system-status
pub async fn system_status(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(dashboard.system_status()))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard/summary", web::get().to(summary))
        .route("/reports", web::get().to(agent_reports))
        .route("/performance", web::get().to(performance))
        .route("/system-status", web::get().to(system_status));
}
