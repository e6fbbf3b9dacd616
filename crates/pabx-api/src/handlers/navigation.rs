//! Navigation and route resolution handlers

use crate::dto::auth::{ResolveParams, ResolveResponse};
use crate::dto::ApiResponse;
use actix_web::{web, HttpResponse};
use pabx_auth::{navigation_for, resolve, AuthenticatedUser, SessionContext};
use std::sync::Arc;

/// Sidebar entries for the signed-in role
///
/// GET /api/v1/navigation
pub async fn navigation(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(navigation_for(user.role)))
}

/// Resolve a console path against the current session. Public.
///
/// GET /api/v1/routes/resolve?path=/agents
pub async fn resolve_route(
    session: web::Data<Arc<SessionContext>>,
    query: web::Query<ResolveParams>,
) -> HttpResponse {
    let user = session.current_user();
    let decision = resolve(&query.path, user.as_ref());
    HttpResponse::Ok().json(ApiResponse::success(ResolveResponse {
        path: query.into_inner().path,
        decision,
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/navigation", web::get().to(navigation))
        .route("/routes/resolve", web::get().to(resolve_route));
}
