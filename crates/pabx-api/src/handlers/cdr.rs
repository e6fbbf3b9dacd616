//! CDR page handlers
//!
//! Call detail records support the usual list query plus a debounced search
//! box and bulk selection for deletion.

use crate::dto::cdr::{
    DeleteResponse, SearchAccepted, SearchRequest, SelectAllRequest, SelectionResponse,
    ToggleRequest,
};
use crate::dto::{ApiResponse, PageResponse};
use actix_web::{web, HttpResponse};
use pabx_auth::AuthenticatedUser;
use pabx_core::AppError;
use pabx_services::{Dashboard, ListQuery};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// List CDRs
///
/// GET /api/v1/cdrs?search=maria&status=completed&page=2
#[instrument(skip(dashboard, _user))]
pub async fn list_cdrs(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
    query: web::Query<ListQuery>,
) -> HttpResponse {
    let view = &dashboard.cdr;
    let page = view.apply(&query);
    debug!(total = page.total_items, "CDR list served");
    HttpResponse::Ok().json(ApiResponse::success(PageResponse::new(
        page,
        view.list().query(),
    )))
}

/// Debounced search keystroke. The search applies after the quiet period.
///
/// POST /api/v1/cdrs/search
pub async fn search(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
    req: web::Json<SearchRequest>,
) -> HttpResponse {
    let view = &dashboard.cdr;
    view.search_debounced(req.into_inner().text);
    HttpResponse::Accepted().json(ApiResponse::success(SearchAccepted {
        pending: view.search_pending(),
        debounce_ms: view.debounce_delay().as_millis() as u64,
    }))
}

fn selection_response(dashboard: &Dashboard) -> SelectionResponse {
    let view = &dashboard.cdr;
    SelectionResponse::new(&view.selection(), view.page_fully_selected(), view.scope())
}

/// Current selection
///
/// GET /api/v1/cdrs/selection
pub async fn get_selection(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(selection_response(&dashboard)))
}

/// Header checkbox
///
/// POST /api/v1/cdrs/selection/all
#[instrument(skip(dashboard, _user, req), fields(checked = req.checked))]
pub async fn select_all(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
    req: web::Json<SelectAllRequest>,
) -> HttpResponse {
    dashboard.cdr.select_all(req.checked);
    HttpResponse::Ok().json(ApiResponse::success(selection_response(&dashboard)))
}

/// Row checkbox
///
/// POST /api/v1/cdrs/selection/toggle
pub async fn toggle(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
    req: web::Json<ToggleRequest>,
) -> Result<HttpResponse, AppError> {
    dashboard.cdr.toggle(req.id, req.checked)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(selection_response(&dashboard))))
}

/// Delete every selected CDR
///
/// DELETE /api/v1/cdrs/selection
#[instrument(skip(dashboard, user), fields(user = %user.email))]
pub async fn delete_selected(
    dashboard: web::Data<Arc<Dashboard>>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let deleted = dashboard.cdr.delete_selected().await?;
    info!(deleted, "CDRs deleted");
    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        DeleteResponse { deleted },
        format!("{} record(s) deleted", deleted),
    )))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/cdrs")
            .route("", web::get().to(list_cdrs))
            .route("/search", web::post().to(search))
            .route("/selection", web::get().to(get_selection))
            .route("/selection", web::delete().to(delete_selected))
            .route("/selection/all", web::post().to(select_all))
            .route("/selection/toggle", web::post().to(toggle)),
    );
}
