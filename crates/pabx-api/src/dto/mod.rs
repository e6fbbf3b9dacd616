//! Data Transfer Objects (DTOs) for API requests and responses

pub mod auth;
pub mod cdr;
pub mod common;
pub mod export;
pub mod user;

pub use auth::*;
pub use cdr::*;
pub use common::*;
pub use export::*;
pub use user::*;
