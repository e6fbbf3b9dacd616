//! Session context
//!
//! The single signed-in identity of the console. Created at start-up by
//! restoring from the session store, changed only by login and logout.

use crate::credentials::CredentialTable;
use crate::register::RegisterForm;
use pabx_core::models::{AuthUser, Notification};
use pabx_core::traits::{NotificationEmitter, SessionStore};
use pabx_core::{AppError, AppResult};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    key: String,
    credentials: CredentialTable,
    notifier: Arc<dyn NotificationEmitter>,
    current: RwLock<Option<AuthUser>>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("key", &self.key)
            .field("current", &*self.current.read())
            .finish()
    }
}

impl SessionContext {
    /// Create the context, reading the persisted user once.
    ///
    /// A missing, unreadable or malformed value starts signed out.
    pub fn restore(
        store: Arc<dyn SessionStore>,
        key: impl Into<String>,
        notifier: Arc<dyn NotificationEmitter>,
    ) -> Self {
        let key = key.into();
        let current = match store.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<AuthUser>(&raw) {
                Ok(user) => {
                    info!(email = %user.email, role = %user.role, "Session restored");
                    Some(user)
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "Ignoring malformed persisted session");
                    None
                }
            },
            Ok(None) => {
                debug!(key = %key, "No persisted session");
                None
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Session store unreadable, starting signed out");
                None
            }
        };

        Self {
            store,
            key,
            credentials: CredentialTable::default(),
            notifier,
            current: RwLock::new(current),
        }
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.current.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    /// Sign in with an email/password pair.
    ///
    /// Unknown email and wrong password fail identically.
    #[instrument(skip(self, password))]
    pub fn login(&self, email: &str, password: &str) -> AppResult<AuthUser> {
        if email.is_empty() || password.is_empty() {
            let missing: Vec<&str> = [("email", email), ("password", password)]
                .into_iter()
                .filter(|(_, value)| value.is_empty())
                .map(|(field, _)| field)
                .collect();
            let err = AppError::missing_fields(missing);
            self.notifier
                .emit(Notification::error("Login failed", err.to_string()));
            return Err(err);
        }

        let user = match self.credentials.authenticate(email, password) {
            Some(user) => user,
            None => {
                info!(email = %email, "Login failed");
                let err = AppError::InvalidCredentials;
                self.notifier
                    .emit(Notification::error("Login failed", err.to_string()));
                return Err(err);
            }
        };

        match serde_json::to_string(&user) {
            Ok(raw) => {
                if let Err(e) = self.store.set(&self.key, &raw) {
                    warn!(error = %e, "Failed to persist session");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize session"),
        }

        *self.current.write() = Some(user.clone());
        info!(email = %user.email, role = %user.role, "Login successful");
        self.notifier.emit(Notification::success(
            "Welcome",
            format!("Signed in as {}", user.name),
        ));

        Ok(user)
    }

    /// Sign out, deleting the persisted user. Returns who was signed in.
    #[instrument(skip(self))]
    pub fn logout(&self) -> Option<AuthUser> {
        let previous = self.current.write().take();
        if let Err(e) = self.store.remove(&self.key) {
            warn!(error = %e, "Failed to clear persisted session");
        }
        if let Some(user) = &previous {
            info!(email = %user.email, "User logged out");
            self.notifier
                .emit(Notification::info("Signed out", "You have been signed out"));
        }
        previous
    }

    /// Validate a registration request. Nothing is created.
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub fn register(&self, form: &RegisterForm) -> AppResult<()> {
        if let Err(err) = form.check() {
            debug!(error = %err, "Registration rejected");
            self.notifier
                .emit(Notification::error("Registration failed", err.to_string()));
            return Err(err);
        }
        info!(email = %form.email, company = %form.company, "Registration accepted");
        self.notifier.emit(Notification::success(
            "Account created",
            "Your account has been created, you can now sign in",
        ));
        Ok(())
    }
}
