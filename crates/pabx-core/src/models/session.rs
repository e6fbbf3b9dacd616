//! Signed-in user identity
//!
//! The identity kept by the session context and persisted to the session
//! store between runs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Console role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Platform administrator
    Admin,
    /// End customer operating their own call center
    User,
    /// Reseller managing customer accounts
    Reseller,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::User => write!(f, "user"),
            Role::Reseller => write!(f, "reseller"),
        }
    }
}

impl Role {
    /// Parse from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            "reseller" => Some(Role::Reseller),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Authenticated user as stored in the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub company: String,
    pub plan: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("reseller"), Some(Role::Reseller));
        assert_eq!(Role::parse("operator"), None);
        assert!(Role::Admin.is_admin());
        assert!(!Role::User.is_admin());
    }

    #[test]
    fn test_auth_user_json_shape() {
        let user = AuthUser {
            id: "1".to_string(),
            email: "admin@pabx.com".to_string(),
            name: "Admin".to_string(),
            role: Role::Admin,
            company: "PABX Corp".to_string(),
            plan: "Enterprise".to_string(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["role"], "admin");
        assert_eq!(value["email"], "admin@pabx.com");
    }
}
