//! In-memory record store
//!
//! An ordered sequence of records shared between a list view and the
//! in-memory mutation facade. Order is insertion order.

use pabx_core::traits::Record;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug)]
pub struct RecordStore<T: Record> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Record> Clone for RecordStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T: Record> RecordStore<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Copy of all records
    pub fn snapshot(&self) -> Vec<T> {
        self.records.read().clone()
    }

    /// Run `f` against the records without copying them
    pub fn with<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.records.read())
    }

    pub fn get(&self, id: u32) -> Option<T> {
        self.records.read().iter().find(|r| r.id() == id).cloned()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.records.read().iter().any(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// One past the highest id in the store
    pub fn next_id(&self) -> u32 {
        self.records
            .read()
            .iter()
            .map(Record::id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Append a record
    pub fn push(&self, record: T) {
        self.records.write().push(record);
    }

    /// Replace the record with the same id in place. Returns false if absent.
    pub fn replace(&self, record: T) -> bool {
        let mut records = self.records.write();
        match records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Remove every record whose id is in `ids`, returning how many went
    pub fn remove_ids(&self, ids: &[u32]) -> usize {
        let doomed: HashSet<u32> = ids.iter().copied().collect();
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|r| !doomed.contains(&r.id()));
        before - records.len()
    }
}
