//! Client agent handlers (read-only)

use super::crud;
use actix_web::web;
use pabx_core::models::ClientAgent;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/client-agents")
            .route("", web::get().to(crud::list::<ClientAgent>))
            .route("/{id}", web::get().to(crud::get_one::<ClientAgent>)),
    );
}
