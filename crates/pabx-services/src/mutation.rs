//! Mutation facades
//!
//! Modal saves and bulk deletes go through a `MutationFacade`. The
//! log-only facade records the intent and changes nothing; the in-memory
//! facade applies it to the record store backing the list view.

use crate::store::RecordStore;
use async_trait::async_trait;
use pabx_core::config::MutationMode;
use pabx_core::traits::{MutationFacade, Record};
use pabx_core::{AppError, AppResult};
use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Logs every intent and leaves the data untouched
pub struct LoggingFacade<T> {
    entity: &'static str,
    _marker: PhantomData<fn(T)>,
}

impl<T> LoggingFacade<T> {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Record + Debug> MutationFacade<T> for LoggingFacade<T> {
    fn name(&self) -> &'static str {
        "log_only"
    }

    async fn create(&self, record: T) -> AppResult<T> {
        info!(entity = self.entity, record = ?record, "Create requested");
        Ok(record)
    }

    async fn update(&self, record: T) -> AppResult<T> {
        info!(entity = self.entity, id = record.id(), record = ?record, "Update requested");
        Ok(record)
    }

    async fn delete(&self, ids: &[u32]) -> AppResult<usize> {
        info!(entity = self.entity, ids = ?ids, "Delete requested");
        Ok(0)
    }
}

/// Applies intents to a shared record store
pub struct InMemoryFacade<T: Record> {
    entity: &'static str,
    store: RecordStore<T>,
    assign_id: fn(&mut T, u32),
}

impl<T: Record> InMemoryFacade<T> {
    /// `assign_id` writes a fresh id into records created with id 0
    pub fn new(entity: &'static str, store: RecordStore<T>, assign_id: fn(&mut T, u32)) -> Self {
        Self {
            entity,
            store,
            assign_id,
        }
    }

    pub fn store(&self) -> &RecordStore<T> {
        &self.store
    }
}

#[async_trait]
impl<T: Record + Debug> MutationFacade<T> for InMemoryFacade<T> {
    fn name(&self) -> &'static str {
        "in_memory"
    }

    #[instrument(skip(self, record), fields(entity = self.entity))]
    async fn create(&self, mut record: T) -> AppResult<T> {
        if record.id() == 0 {
            (self.assign_id)(&mut record, self.store.next_id());
        } else if self.store.contains(record.id()) {
            return Err(AppError::Conflict(format!(
                "{} {} already exists",
                self.entity,
                record.id()
            )));
        }
        debug!(id = record.id(), "Inserting record");
        self.store.push(record.clone());
        Ok(record)
    }

    #[instrument(skip(self, record), fields(entity = self.entity, id = record.id()))]
    async fn update(&self, record: T) -> AppResult<T> {
        if !self.store.replace(record.clone()) {
            warn!("Update for unknown record");
            return Err(AppError::NotFound(format!(
                "{} {}",
                self.entity,
                record.id()
            )));
        }
        Ok(record)
    }

    #[instrument(skip(self), fields(entity = self.entity))]
    async fn delete(&self, ids: &[u32]) -> AppResult<usize> {
        let removed = self.store.remove_ids(ids);
        info!(requested = ids.len(), removed, "Records deleted");
        Ok(removed)
    }
}

/// Build the facade selected by configuration
pub fn facade_for<T: Record + Debug>(
    mode: MutationMode,
    entity: &'static str,
    store: &RecordStore<T>,
    assign_id: fn(&mut T, u32),
) -> Arc<dyn MutationFacade<T>> {
    match mode {
        MutationMode::LogOnly => Arc::new(LoggingFacade::new(entity)),
        MutationMode::InMemory => Arc::new(InMemoryFacade::new(entity, store.clone(), assign_id)),
    }
}
