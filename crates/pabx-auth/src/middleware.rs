//! Actix-web request extractors for the signed-in user
//!
//! The console has one process-wide session, so the extractor reads the
//! shared `SessionContext` instead of a per-request token.

use crate::session::SessionContext;
use actix_web::{dev::Payload, error::ErrorUnauthorized, web, FromRequest, HttpRequest};
use pabx_core::error::AppError;
use pabx_core::models::AuthUser;
use futures::future::{ready, Ready};
use std::sync::Arc;
use tracing::{debug, warn};

/// Authenticated user extractor
///
/// # Examples
///
/// ```no_run
/// use actix_web::HttpResponse;
/// use pabx_auth::middleware::AuthenticatedUser;
///
/// async fn protected_handler(user: AuthenticatedUser) -> HttpResponse {
///     HttpResponse::Ok().json(serde_json::json!({
///         "email": user.email,
///         "role": user.role
///     }))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub AuthUser);

impl std::ops::Deref for AuthenticatedUser {
    type Target = AuthUser;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AuthenticatedUser {
    pub fn into_inner(self) -> AuthUser {
        self.0
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = match req.app_data::<web::Data<Arc<SessionContext>>>() {
            Some(session) => session.get_ref().clone(),
            None => {
                warn!("SessionContext not found in app data");
                return ready(Err(ErrorUnauthorized(AppError::Unauthorized(
                    "Session not configured".to_string(),
                ))));
            }
        };

        match session.current_user() {
            Some(user) => {
                debug!(email = %user.email, role = %user.role, "Session user resolved");
                ready(Ok(AuthenticatedUser(user)))
            }
            None => {
                debug!(path = %req.path(), "No active session");
                ready(Err(AppError::Unauthorized("Not signed in".to_string()).into()))
            }
        }
    }
}
