//! HTTP API for the PABX console
//!
//! Handlers are thin: they read the shared `SessionContext` and `Dashboard`
//! from app data, call into the view layer and wrap the result in
//! `ApiResponse`.

pub mod dto;
pub mod handlers;

pub use dto::{ApiResponse, PageResponse};
pub use handlers::configure_api;
