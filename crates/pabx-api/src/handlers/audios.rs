//! Audio library handlers
//!
//! Uploads are plain form submissions carrying the picked file name; the
//! file itself is never transferred.

use super::crud;
use actix_web::web;
use pabx_core::models::Audio;
use pabx_services::forms::AudioForm;

/// Configure audio routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/audios")
            .route("", web::get().to(crud::list::<Audio>))
            .route("", web::post().to(crud::create::<AudioForm>))
            .route("/form", web::get().to(crud::open_blank::<AudioForm>))
            .route("/form", web::delete().to(crud::close::<AudioForm>))
            .route("/{id}", web::get().to(crud::get_one::<Audio>))
            .route("/{id}", web::put().to(crud::update::<AudioForm>))
            .route("/{id}/form", web::get().to(crud::open_edit::<AudioForm>)),
    );
}
