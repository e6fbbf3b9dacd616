//! Rate page handlers

use super::crud;
use actix_web::web;
use pabx_core::models::Rate;
use pabx_services::forms::RateForm;

/// Configure rate routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/rates")
            .route("", web::get().to(crud::list::<Rate>))
            .route("", web::post().to(crud::create::<RateForm>))
            .route("/form", web::get().to(crud::open_blank::<RateForm>))
            .route("/form", web::delete().to(crud::close::<RateForm>))
            .route("/{id}", web::get().to(crud::get_one::<Rate>))
            .route("/{id}", web::put().to(crud::update::<RateForm>))
            .route("/{id}/form", web::get().to(crud::open_edit::<RateForm>)),
    );
}
