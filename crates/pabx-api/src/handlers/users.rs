//! User (customer account) page handlers
//!
//! Rows carry the days left on the plan, derived from today's date on
//! every read.

use super::crud::{self, ListPage};
use crate::dto::{ApiResponse, PageResponse, UserRow};
use actix_web::{web, HttpResponse};
use chrono::{Local, NaiveDate};
use pabx_auth::AuthenticatedUser;
use pabx_core::models::User;
use pabx_core::AppError;
use pabx_services::forms::UserForm;
use pabx_services::{Dashboard, ListQuery};
use std::sync::Arc;
use tracing::debug;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// List users
///
/// GET /api/v1/users?search=acme&status=active&page=1
pub async fn list_users(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
    query: web::Query<ListQuery>,
) -> HttpResponse {
    let view = User::view(&dashboard);
    let today = today();
    let page = view.apply(&query).map(|user| UserRow::new(user, today));
    debug!(total = page.total_items, "User list served");
    HttpResponse::Ok().json(ApiResponse::success(PageResponse::new(page, view.query())))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
    path: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let user = dashboard
        .users
        .store()
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(UserRow::new(user, today()))))
}

/// Configure user routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::get().to(list_users))
            .route("", web::post().to(crud::create::<UserForm>))
            .route("/form", web::get().to(crud::open_blank::<UserForm>))
            .route("/form", web::delete().to(crud::close::<UserForm>))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(crud::update::<UserForm>))
            .route("/{id}/form", web::get().to(crud::open_edit::<UserForm>)),
    );
}
