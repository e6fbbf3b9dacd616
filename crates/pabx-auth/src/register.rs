//! Registration form
//!
//! Presence checks plus password confirmation. Nothing is stored: a valid
//! form only produces a success notification.

use pabx_core::AppError;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    /// Not format-checked
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[serde(alias = "confirmPassword")]
    #[validate(length(min = 1, message = "Password confirmation is required"))]
    pub confirm_password: String,
}

impl RegisterForm {
    /// Missing fields are reported first, then a password mismatch
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()?;
        if self.password != self.confirm_password {
            return Err(AppError::PasswordMismatch);
        }
        Ok(())
    }
}
