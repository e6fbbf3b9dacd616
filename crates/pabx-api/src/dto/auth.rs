//! Authentication DTOs

use pabx_auth::{NavItem, RouteDecision};
use pabx_core::models::AuthUser;
use serde::{Deserialize, Serialize};

/// Login request. Presence is checked by the session so that failures
/// also produce a notification.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub user: AuthUser,
    pub navigation: &'static [NavItem],
    /// Where the console goes after signing in
    pub redirect: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub user: AuthUser,
    pub navigation: &'static [NavItem],
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct LogoutResponse {
    pub signed_out: bool,
    pub redirect: &'static str,
}

/// Query for route resolution
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveParams {
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolveResponse {
    pub path: String,
    #[serde(flatten)]
    pub decision: RouteDecision,
}
