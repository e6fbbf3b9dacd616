//! Settings handlers

use crate::dto::ApiResponse;
use actix_web::{web, HttpResponse};
use pabx_auth::AuthenticatedUser;
use pabx_core::AppError;
use pabx_services::forms::SettingsForm;
use pabx_services::Dashboard;
use std::sync::Arc;
use tracing::instrument;

/// GET /api/v1/settings
pub async fn get_settings(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(dashboard.settings.current()))
}

/// PUT /api/v1/settings
#[instrument(skip(dashboard, _user, req))]
pub async fn update_settings(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
    req: web::Json<SettingsForm>,
) -> Result<HttpResponse, AppError> {
    let settings = dashboard.settings.save(&req)?;
    Ok(HttpResponse::Ok().json(ApiResponse::with_message(settings, "Settings saved")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/settings")
            .route("", web::get().to(get_settings))
            .route("", web::put().to(update_settings)),
    );
}
