//! Persistence traits for lexi.
//!
//! The word collection and the review ledger are both persisted the same
//! way: one JSON document holding a bare array of records, loaded and
//! rewritten as a unit. `RecordStore` captures that contract once for both.

use std::sync::Arc;

use crate::error::Result;

/// Trait for whole-collection storage backends.
///
/// Implementations persist an ordered list of records as a single unit.
/// There is no partial update: every mutation saves the full collection.
pub trait RecordStore<T>: Send + Sync {
    /// Load the full collection.
    ///
    /// A missing backing document yields an empty collection, not an error.
    fn load(&self) -> Result<Vec<T>>;

    /// Persist the full collection, replacing whatever was stored.
    fn save(&self, records: &[T]) -> Result<()>;
}

/// Blanket implementation of RecordStore for Arc-wrapped stores.
///
/// This allows sharing one store between the application context and tests.
impl<T, S: RecordStore<T> + ?Sized> RecordStore<T> for Arc<S> {
    fn load(&self) -> Result<Vec<T>> {
        (**self).load()
    }

    fn save(&self, records: &[T]) -> Result<()> {
        (**self).save(records)
    }
}

/// Test utilities for RecordStore implementations.
#[cfg(test)]
pub mod tests {
    use super::*;

    /// Test helper to verify RecordStore implementations.
    pub fn test_record_store_roundtrip<S: RecordStore<String>>(store: &S) {
        // A fresh store is empty
        assert!(store.load().unwrap().is_empty());

        // Save and reload
        let records = vec!["alpha".to_string(), "beta".to_string()];
        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);

        // Save replaces, never appends
        let replacement = vec!["gamma".to_string()];
        store.save(&replacement).unwrap();
        assert_eq!(store.load().unwrap(), replacement);

        // Saving empty clears
        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
