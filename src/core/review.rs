//! Review events for the training history.
//!
//! Every answered practice question appends one `ReviewEvent` to the
//! ledger. Events are never mutated or deleted; all statistics are derived
//! from this history.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Test type tag recorded by quiz practice answers.
pub const TEST_TYPE_PRACTICE: &str = "practice";

/// Outcome of one answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewOutcome {
    Correct,
    Incorrect,
}

impl ReviewOutcome {
    /// Build an outcome from a correctness flag.
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// One entry in the review ledger.
///
/// Field names match the on-disk history format. `word_id` carries the
/// word's display text rather than its stable id; the history predates
/// stable ids and the format is kept as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewEvent {
    /// Day the review happened, `"%Y-%m-%d"`.
    pub date: String,
    /// Display text of the reviewed word.
    #[serde(rename = "wordId")]
    pub word_id: String,
    /// Whether the answer was correct.
    pub result: ReviewOutcome,
    /// Which kind of test produced the event.
    #[serde(rename = "testType", default = "default_test_type")]
    pub test_type: String,
    /// Coarse session timestamp, `"%Y%m%d%H%M%S"`.
    #[serde(rename = "sessionId", default)]
    pub session_id: String,
    /// Full instant of the review, RFC 3339.
    #[serde(default)]
    pub timestamp: String,
}

fn default_test_type() -> String {
    TEST_TYPE_PRACTICE.to_string()
}

impl ReviewEvent {
    /// Create an event for the current instant.
    ///
    /// All three time fields are derived from one clock reading.
    pub fn now(word_text: impl Into<String>, correct: bool, test_type: impl Into<String>) -> Self {
        let instant = Utc::now();
        Self {
            date: instant.format("%Y-%m-%d").to_string(),
            word_id: word_text.into(),
            result: ReviewOutcome::from_correct(correct),
            test_type: test_type.into(),
            session_id: instant.format("%Y%m%d%H%M%S").to_string(),
            timestamp: instant.to_rfc3339(),
        }
    }

    pub fn is_correct(&self) -> bool {
        self.result.is_correct()
    }
}
