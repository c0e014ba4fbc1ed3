//! In-memory record storage for testing.

use std::sync::RwLock;

use crate::error::Result;
use crate::storage::RecordStore;

/// In-memory record store for tests.
///
/// Thread-safe implementation using `RwLock<Vec<T>>`. Contents are lost
/// when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryRecordStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Clone> MemoryRecordStore<T> {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-seeded with records.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().unwrap().is_empty()
    }
}

impl<T: Clone + Send + Sync> RecordStore<T> for MemoryRecordStore<T> {
    fn load(&self) -> Result<Vec<T>> {
        Ok(self.records.read().unwrap().clone())
    }

    fn save(&self, records: &[T]) -> Result<()> {
        *self.records.write().unwrap() = records.to_vec();
        Ok(())
    }
}
