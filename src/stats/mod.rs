//! Statistics derived from the review ledger.

pub mod summary;

pub use summary::{DayCount, PracticeStats, ReviewSummary, TypeAccuracy};
