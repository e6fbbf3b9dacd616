//! Unified error handling for the PABX console
//!
//! Form validation, authentication and session failures all map onto one
//! error type, with automatic HTTP response mapping for the API layer.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Main application error type
///
/// It implements `ResponseError` for automatic HTTP response generation.
#[derive(Error, Debug)]
pub enum AppError {
    // ==================== Authentication Errors ====================
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    // ==================== Validation Errors ====================
    #[error("Missing required field(s): {0}")]
    MissingFields(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ==================== Resource Errors ====================
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // ==================== Internal Errors ====================
    #[error("Session store error: {0}")]
    SessionStore(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Build a missing-fields error from a list of field names
    pub fn missing_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = fields
            .into_iter()
            .map(|f| f.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        AppError::MissingFields(joined)
    }

    /// Returns true for errors caused by user input rather than the system
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidCredentials
                | AppError::MissingFields(_)
                | AppError::PasswordMismatch
                | AppError::UnsupportedFileType(_)
                | AppError::Validation(_)
                | AppError::InvalidInput(_)
        )
    }

    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            AppError::MissingFields(_)
            | AppError::PasswordMismatch
            | AppError::Validation(_)
            | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,

            // 401 Unauthorized
            AppError::InvalidCredentials | AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,

            // 404 Not Found
            AppError::NotFound(_) => StatusCode::NOT_FOUND,

            // 409 Conflict
            AppError::Conflict(_) => StatusCode::CONFLICT,

            // 415 Unsupported Media Type
            AppError::UnsupportedFileType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,

            // 500 Internal Server Error
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::Unauthorized(_) => "unauthorized",
            AppError::MissingFields(_) => "missing_fields",
            AppError::PasswordMismatch => "password_mismatch",
            AppError::UnsupportedFileType(_) => "unsupported_file_type",
            AppError::Validation(_) => "validation_error",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::NotFound(_) => "not_found",
            AppError::Conflict(_) => "conflict",
            AppError::SessionStore(_) => "session_store_error",
            AppError::Internal(_) => "internal_error",
            AppError::Config(_) => "config_error",
            AppError::Serialization(_) => "serialization_error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        AppError::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = json!({
            "error": self.error_code(),
            "message": self.to_string(),
            "status": status.as_u16(),
        });

        HttpResponse::build(status).json(body)
    }
}

// ==================== From implementations ====================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = err
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();

        if fields.is_empty() {
            AppError::Validation(err.to_string())
        } else {
            AppError::missing_fields(fields)
        }
    }
}
