//! The review ledger: append-only training history.
//!
//! Every answered question appends one event and rewrites the backing
//! document. Full-file rewrite per append is fine at this scale; a large
//! history would want batching, which this store deliberately does not do.

use crate::core::ReviewEvent;
use crate::error::FailSoft;
use crate::storage::RecordStore;

/// Append-only history of review events.
#[derive(Debug)]
pub struct ReviewLedger<S: RecordStore<ReviewEvent>> {
    events: Vec<ReviewEvent>,
    store: S,
}

impl<S: RecordStore<ReviewEvent>> ReviewLedger<S> {
    /// Load the history from the store.
    ///
    /// Any read or parse failure degrades to an empty history.
    pub fn load(store: S) -> Self {
        let events = store.load().recover_default("loading review history");
        Self { events, store }
    }

    /// Append an event for the current instant and persist the history.
    pub fn append(&mut self, word_text: &str, correct: bool, test_type: &str) -> &ReviewEvent {
        self.events
            .push(ReviewEvent::now(word_text, correct, test_type));
        self.store
            .save(&self.events)
            .recover_default("saving review history");
        // Just pushed, so last() always exists
        self.events.last().expect("event just appended")
    }

    /// The full ordered history.
    pub fn events(&self) -> &[ReviewEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
