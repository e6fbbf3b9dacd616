//! Authentication handlers
//!
//! HTTP handlers for the console session: login, logout, current user and
//! registration.

use crate::dto::auth::{LoginRequest, LoginResponse, LogoutResponse, MeResponse};
use crate::dto::{Ack, ApiResponse};
use actix_web::{web, HttpResponse};
use pabx_auth::routes::{HOME_PATH, LOGIN_PATH};
use pabx_auth::{navigation_for, AuthenticatedUser, RegisterForm, SessionContext};
use pabx_core::AppError;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Login endpoint
///
/// POST /api/v1/auth/login
#[instrument(skip(session, req), fields(email = %req.email))]
pub async fn login(
    session: web::Data<Arc<SessionContext>>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    debug!("Processing login request");

    let user = session.login(&req.email, &req.password)?;
    let response = LoginResponse {
        navigation: navigation_for(user.role),
        user,
        redirect: HOME_PATH,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// Logout endpoint
///
/// POST /api/v1/auth/logout
#[instrument(skip(session))]
pub async fn logout(session: web::Data<Arc<SessionContext>>) -> HttpResponse {
    let previous = session.logout();
    HttpResponse::Ok().json(ApiResponse::success(LogoutResponse {
        signed_out: previous.is_some(),
        redirect: LOGIN_PATH,
    }))
}

/// Get current user info
///
/// GET /api/v1/auth/me
pub async fn me(user: AuthenticatedUser) -> HttpResponse {
    let user = user.into_inner();
    HttpResponse::Ok().json(ApiResponse::success(MeResponse {
        navigation: navigation_for(user.role),
        user,
    }))
}

/// Register a new account. Nothing is stored.
///
/// POST /api/v1/auth/register
#[instrument(skip(session, req), fields(email = %req.email))]
pub async fn register(
    session: web::Data<Arc<SessionContext>>,
    req: web::Json<RegisterForm>,
) -> Result<HttpResponse, AppError> {
    session.register(&req)?;
    info!("Registration accepted");
    Ok(HttpResponse::Created().json(ApiResponse::with_message(
        Ack::default(),
        "Account created",
    )))
}

/// Configure authentication routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login))
            .route("/logout", web::post().to(logout))
            .route("/me", web::get().to(me))
            .route("/register", web::post().to(register)),
    );
}
