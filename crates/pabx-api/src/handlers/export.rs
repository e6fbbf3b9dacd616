//! Export handler
//!
//! Exports are simulated: the handler counts what the current filters would
//! export and waits out the configured delay.

use crate::dto::export::ExportRequest;
use crate::dto::ApiResponse;
use actix_web::{web, HttpResponse};
use pabx_auth::AuthenticatedUser;
use pabx_core::AppError;
use pabx_services::Dashboard;
use std::sync::Arc;
use tracing::instrument;

/// Number of records the named list currently shows across all pages
fn dataset_size(dashboard: &Dashboard, dataset: &str) -> Result<usize, AppError> {
    let count = match dataset {
        "agents" => dashboard.agents.filtered().len(),
        "cdr" | "cdrs" => dashboard.cdr.list().filtered().len(),
        "users" => dashboard.users.filtered().len(),
        "rates" => dashboard.rates.filtered().len(),
        "audios" => dashboard.audios.filtered().len(),
        "client-agents" => dashboard.client_agents.filtered().len(),
        other => {
            return Err(AppError::InvalidInput(format!(
                "Unknown dataset: {}",
                other
            )))
        }
    };
    Ok(count)
}

/// POST /api/v1/export
#[instrument(skip(dashboard, _user, req), fields(dataset = %req.dataset, format = %req.format))]
pub async fn export(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
    req: web::Json<ExportRequest>,
) -> Result<HttpResponse, AppError> {
    let req = req.into_inner();
    let records = dataset_size(&dashboard, &req.dataset)?;
    let receipt = dashboard
        .exports
        .export(&req.dataset, records, req.format)
        .await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(receipt)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/export", web::post().to(export));
}
