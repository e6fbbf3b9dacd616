//! PABX Console Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the PABX console. It includes:
//!
//! - Domain models (Agent, ActiveCall, CDR, Plan, User, Rate, etc.)
//! - The generic list-query engine (search, filter, paginate, select)
//! - Common traits for mutation facades, notifications and session storage
//! - Unified error handling with HTTP response mapping
//! - Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod traits;

pub use config::AppConfig;
pub use error::AppError;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
