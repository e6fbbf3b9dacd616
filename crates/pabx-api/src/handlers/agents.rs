//! Agent page handlers

use super::crud;
use actix_web::web;
use pabx_core::models::Agent;
use pabx_services::forms::AgentForm;

/// Configure agent routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/agents")
            .route("", web::get().to(crud::list::<Agent>))
            .route("", web::post().to(crud::create::<AgentForm>))
            .route("/form", web::get().to(crud::open_blank::<AgentForm>))
            .route("/form", web::delete().to(crud::close::<AgentForm>))
            .route("/{id}", web::get().to(crud::get_one::<Agent>))
            .route("/{id}", web::put().to(crud::update::<AgentForm>))
            .route("/{id}/form", web::get().to(crud::open_edit::<AgentForm>)),
    );
}
