//! Hard-coded credential table
//!
//! Three demo accounts, one per role. Passwords are compared by exact
//! string equality; there is no hashing and no backend call.

use pabx_core::models::{AuthUser, Role};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
struct Credential {
    id: &'static str,
    email: &'static str,
    password: &'static str,
    name: &'static str,
    role: Role,
    company: &'static str,
    plan: &'static str,
}

impl Credential {
    fn to_user(self) -> AuthUser {
        AuthUser {
            id: self.id.to_string(),
            email: self.email.to_string(),
            name: self.name.to_string(),
            role: self.role,
            company: self.company.to_string(),
            plan: self.plan.to_string(),
        }
    }
}

const DEMO_CREDENTIALS: [Credential; 3] = [
    Credential {
        id: "1",
        email: "admin@pabx.com",
        password: "admin123",
        name: "Administrator",
        role: Role::Admin,
        company: "PABX Corp",
        plan: "Enterprise",
    },
    Credential {
        id: "2",
        email: "user@pabx.com",
        password: "user123",
        name: "John Smith",
        role: Role::User,
        company: "Acme Contact Center",
        plan: "Professional",
    },
    Credential {
        id: "3",
        email: "reseller@pabx.com",
        password: "reseller123",
        name: "Reseller Partner",
        role: Role::Reseller,
        company: "VoIP Partners Inc",
        plan: "Reseller",
    },
];

/// Lookup table of known accounts
#[derive(Debug, Clone)]
pub struct CredentialTable {
    entries: &'static [Credential],
}

impl Default for CredentialTable {
    fn default() -> Self {
        Self {
            entries: &DEMO_CREDENTIALS,
        }
    }
}

impl CredentialTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check an email/password pair.
    ///
    /// Unknown email and wrong password both yield `None`.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<AuthUser> {
        let found = self
            .entries
            .iter()
            .find(|entry| entry.email == email && entry.password == password);
        debug!(email = %email, matched = found.is_some(), "Credential lookup");
        found.map(|entry| entry.to_user())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
