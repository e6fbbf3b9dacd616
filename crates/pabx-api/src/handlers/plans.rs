//! Plan handlers
//!
//! Plans are few and shown as cards, so the list is not paginated.

use super::crud;
use crate::dto::ApiResponse;
use actix_web::{web, HttpResponse};
use pabx_auth::AuthenticatedUser;
use pabx_core::AppError;
use pabx_services::forms::PlanForm;
use pabx_services::Dashboard;
use std::sync::Arc;

/// List all plans
///
/// GET /api/v1/plans
pub async fn list_plans(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(dashboard.plans.snapshot()))
}

/// Get one plan
///
/// GET /api/v1/plans/{id}
pub async fn get_plan(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
    path: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let plan = dashboard
        .plans
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("plan {}", id)))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(plan)))
}

/// Configure plan routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/plans")
            .route("", web::get().to(list_plans))
            .route("", web::post().to(crud::create::<PlanForm>))
            .route("/form", web::get().to(crud::open_blank::<PlanForm>))
            .route("/form", web::delete().to(crud::close::<PlanForm>))
            .route("/{id}", web::get().to(get_plan))
            .route("/{id}", web::put().to(crud::update::<PlanForm>))
            .route("/{id}/form", web::get().to(crud::open_edit::<PlanForm>)),
    );
}
