//! Common traits for records, mutation facades, notifications and sessions
//!
//! These are the seams between the console views and whatever sits behind
//! them: the in-memory store today, a backend API tomorrow.

use crate::error::AppError;
use crate::models::Notification;
use async_trait::async_trait;

/// A record rendered by a list view
pub trait Record: Clone + Send + Sync + 'static {
    /// Stable identifier, unique within its record store
    fn id(&self) -> u32;
}

/// Receiver of create/update/delete intents coming out of the console forms
///
/// Implementations decide what a save means: log it, apply it to the
/// in-memory store, or forward it to a remote API.
#[async_trait]
pub trait MutationFacade<T: Record>: Send + Sync {
    /// Short name of the backing implementation, used in logs
    fn name(&self) -> &'static str;

    /// Create a new record. `record.id` may be 0 and is assigned by the facade.
    async fn create(&self, record: T) -> Result<T, AppError>;

    /// Replace an existing record
    async fn update(&self, record: T) -> Result<T, AppError>;

    /// Delete records by id, returning how many were removed
    async fn delete(&self, ids: &[u32]) -> Result<usize, AppError>;
}

/// Fire-and-forget user feedback
pub trait NotificationEmitter: Send + Sync {
    fn emit(&self, notification: Notification);
}

/// Durable string key/value store used to persist the signed-in user
pub trait SessionStore: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Delete a value; deleting a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), AppError>;
}
