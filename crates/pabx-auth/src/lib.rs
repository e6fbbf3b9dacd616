//! Session, credentials and route access for the PABX console
//!
//! This crate owns the single signed-in identity of the console and
//! everything that depends on it.
//!
//! # Features
//!
//! - Hard-coded credential table (admin, user, reseller)
//! - `SessionContext`: restore from a durable store, login, logout
//! - File and in-memory `SessionStore` implementations
//! - Route table with login redirect for protected paths
//! - Role-based navigation menus
//! - Actix-web extractor for the authenticated user
//!
//! # Examples
//!
//! ```no_run
//! use pabx_auth::{MemorySessionStore, SessionContext};
//! use pabx_core::models::Notification;
//! use pabx_core::traits::NotificationEmitter;
//! use std::sync::Arc;
//!
//! struct Toasts;
//! impl NotificationEmitter for Toasts {
//!     fn emit(&self, n: Notification) { println!("{}", n.message); }
//! }
//!
//! let session = SessionContext::restore(
//!     Arc::new(MemorySessionStore::new()),
//!     "pabx_user",
//!     Arc::new(Toasts),
//! );
//! let user = session.login("admin@pabx.com", "admin123")?;
//! assert!(user.role.is_admin());
//! # Ok::<(), pabx_core::AppError>(())
//! ```

pub mod credentials;
pub mod middleware;
pub mod navigation;
pub mod register;
pub mod routes;
pub mod session;
pub mod store;

pub use credentials::CredentialTable;
pub use middleware::AuthenticatedUser;
pub use navigation::{navigation_for, NavItem};
pub use register::RegisterForm;
pub use routes::{resolve, Route, RouteDecision};
pub use session::SessionContext;
pub use store::{FileSessionStore, MemorySessionStore};
