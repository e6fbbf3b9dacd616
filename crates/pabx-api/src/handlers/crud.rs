//! Generic list and modal handlers
//!
//! Every data page exposes the same list endpoint and, where editable, the
//! same modal endpoints. The concrete page is chosen through the
//! `ListPage` and `FormPage` traits at route registration.

use crate::dto::{Ack, ApiResponse, PageResponse};
use actix_web::{web, HttpResponse};
use pabx_auth::AuthenticatedUser;
use pabx_core::models::{Agent, Audio, ClientAgent, Plan, Rate, User};
use pabx_core::traits::Record;
use pabx_core::AppError;
use pabx_services::forms::{AgentForm, AudioForm, PlanForm, RateForm, UserForm};
use pabx_services::{Dashboard, EntityForm, ListQuery, ListView, ModalController};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

/// A record kind with a paginated list page
pub trait ListPage: Record + Serialize {
    const NAME: &'static str;

    fn view(dashboard: &Dashboard) -> &ListView<Self>;
}

/// A form kind with a create/edit modal
pub trait FormPage: EntityForm + Serialize + DeserializeOwned {
    fn modal(dashboard: &Dashboard) -> &ModalController<Self>;

    fn lookup(dashboard: &Dashboard, id: u32) -> Option<Self::Entity>;
}

macro_rules! list_page {
    ($record:ty, $name:literal, $field:ident) => {
        impl ListPage for $record {
            const NAME: &'static str = $name;

            fn view(dashboard: &Dashboard) -> &ListView<Self> {
                &dashboard.$field
            }
        }
    };
}

list_page!(Agent, "agent", agents);
list_page!(User, "user", users);
list_page!(Rate, "rate", rates);
list_page!(Audio, "audio", audios);
list_page!(ClientAgent, "client agent", client_agents);

macro_rules! form_page {
    ($form:ty, $modal:ident, $list:ident) => {
        impl FormPage for $form {
            fn modal(dashboard: &Dashboard) -> &ModalController<Self> {
                &dashboard.$modal
            }

            fn lookup(dashboard: &Dashboard, id: u32) -> Option<Self::Entity> {
                dashboard.$list.store().get(id)
            }
        }
    };
}

form_page!(AgentForm, agent_modal, agents);
form_page!(UserForm, user_modal, users);
form_page!(RateForm, rate_modal, rates);
form_page!(AudioForm, audio_modal, audios);

impl FormPage for PlanForm {
    fn modal(dashboard: &Dashboard) -> &ModalController<Self> {
        &dashboard.plan_modal
    }

    fn lookup(dashboard: &Dashboard, id: u32) -> Option<Plan> {
        dashboard.plans.get(id)
    }
}

/// GET list page, applying `search`, `status` and `page`
#[instrument(skip(dashboard, _user), fields(page = T::NAME))]
pub async fn list<T: ListPage>(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
    query: web::Query<ListQuery>,
) -> HttpResponse {
    let view = T::view(&dashboard);
    let page = view.apply(&query);
    debug!(total = page.total_items, page = page.page, "List served");
    HttpResponse::Ok().json(ApiResponse::success(PageResponse::new(page, view.query())))
}

/// GET one record
pub async fn get_one<T: ListPage>(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
    path: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let record = T::view(&dashboard)
        .store()
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("{} {}", T::NAME, id)))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(record)))
}

/// Open the modal blank and return its defaults
pub async fn open_blank<F: FormPage>(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
) -> HttpResponse {
    let form = F::modal(&dashboard).open_blank();
    HttpResponse::Ok().json(ApiResponse::success(form))
}

/// Open the modal pre-filled from an existing record
pub async fn open_edit<F: FormPage>(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
    path: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let entity = F::lookup(&dashboard, id)
        .ok_or_else(|| AppError::NotFound(format!("{} {}", F::LABEL, id)))?;
    let form = F::modal(&dashboard).open_for(&entity);
    Ok(HttpResponse::Ok().json(ApiResponse::success(form)))
}

/// Close the modal, discarding input
pub async fn close<F: FormPage>(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
) -> HttpResponse {
    F::modal(&dashboard).close();
    HttpResponse::Ok().json(ApiResponse::success(Ack::default()))
}

/// Submit a new record
#[instrument(skip(dashboard, _user, body), fields(entity = F::LABEL))]
pub async fn create<F: FormPage>(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
    body: web::Json<F>,
) -> Result<HttpResponse, AppError> {
    let saved = F::modal(&dashboard).save(None, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::with_message(
        saved,
        format!("{} created", F::LABEL),
    )))
}

/// Submit changes to an existing record
#[instrument(skip(dashboard, _user, body), fields(entity = F::LABEL))]
pub async fn update<F: FormPage>(
    dashboard: web::Data<Arc<Dashboard>>,
    _user: AuthenticatedUser,
    path: web::Path<u32>,
    body: web::Json<F>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let entity = F::lookup(&dashboard, id)
        .ok_or_else(|| AppError::NotFound(format!("{} {}", F::LABEL, id)))?;

    let saved = F::modal(&dashboard)
        .save(Some(entity), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        saved,
        format!("{} updated", F::LABEL),
    )))
}
