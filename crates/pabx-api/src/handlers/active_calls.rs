//! Active calls handlers
//!
//! Mounting the page starts the duration ticker; unmounting stops it.

use crate::dto::ApiResponse;
use actix_web::{web, HttpResponse};
use pabx_auth::AuthenticatedUser;
use pabx_core::AppError;
use pabx_services::Dashboard;
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

#[derive(Debug, Serialize)]
pub struct MountState {
    pub mounted: bool,
}

/// Current calls with live durations
///
/// GET /api/v1/active-calls
pub async fn list_calls(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(dashboard.active_calls.snapshot()))
}

/// POST /api/v1/active-calls/mount
#[instrument(skip(dashboard, _user))]
pub async fn mount(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(dashboard.active_calls.mount()))
}

/// POST /api/v1/active-calls/unmount
#[instrument(skip(dashboard, _user))]
pub async fn unmount(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
) -> HttpResponse {
    dashboard.active_calls.unmount();
    HttpResponse::Ok().json(ApiResponse::success(MountState {
        mounted: dashboard.active_calls.is_mounted(),
    }))
}

/// Request a hang-up. The call is not removed.
///
/// POST /api/v1/active-calls/{id}/hangup
#[instrument(skip(dashboard, _user))]
pub async fn hang_up(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
    path: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
    let call = dashboard.active_calls.hang_up(path.into_inner())?;
    Ok(HttpResponse::Ok().json(ApiResponse::with_message(call, "Call ended")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/active-calls")
            .route("", web::get().to(list_calls))
            .route("/mount", web::post().to(mount))
            .route("/unmount", web::post().to(unmount))
            .route("/{id}/hangup", web::post().to(hang_up)),
    );
}
