//! Word records for the vocabulary collection.
//!
//! A `WordRecord` is one entry in the persisted word collection. Records
//! written by older versions of the data file may lack some fields; every
//! non-essential field carries a serde default so the loader backfills
//! them.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::util::capitalize;

/// Topic assigned to words that were added without one.
pub const DEFAULT_TOPIC: &str = "No topic";

/// Number of correct reviews after which a word counts as mastered.
pub const MASTERY_THRESHOLD: u32 = 3;

/// Learning status of a word.
///
/// Serialized as the bare variant name (`"New"`, `"Learning"`,
/// `"Mastered"`) to match the on-disk collection format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WordStatus {
    /// Never answered correctly in practice.
    #[default]
    New,
    /// Answered correctly at least once.
    Learning,
    /// Reached the mastery threshold.
    Mastered,
}

impl WordStatus {
    /// Parse a status from its display name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "new" => Some(Self::New),
            "learning" => Some(Self::Learning),
            "mastered" => Some(Self::Mastered),
            _ => None,
        }
    }

    /// Display name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Learning => "Learning",
            Self::Mastered => "Mastered",
        }
    }
}

/// One entry in the word collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordRecord {
    /// Stable identifier, generated at creation. Records persisted before
    /// this field existed get a fresh one on load.
    #[serde(default = "new_word_id")]
    pub id: String,
    /// The word being learned, display-capitalized.
    pub word: String,
    /// Its translation, stored as entered.
    pub translation: String,
    /// Example usage, display-capitalized. Empty when not provided.
    #[serde(default)]
    pub sentence: String,
    /// Topic grouping.
    #[serde(default = "default_topic")]
    pub topic: String,
    /// Free-form tags, ordered as entered. The store does not dedup or
    /// lowercase them.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Learning status, driven by practice results.
    #[serde(default)]
    pub status: WordStatus,
    /// Number of correct practice answers.
    #[serde(default)]
    pub review_count: u32,
    /// Stored for the collection format but never written by quiz logic.
    #[serde(default)]
    pub last_reviewed: Option<String>,
    /// Creation timestamp, `"%Y-%m-%d %H:%M:%S"`.
    #[serde(default)]
    pub date_added: String,
}

fn new_word_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn default_topic() -> String {
    DEFAULT_TOPIC.to_string()
}

impl WordRecord {
    /// Create a new record from already-validated input.
    ///
    /// The caller (the wordbook) is responsible for rejecting empty word or
    /// translation; this constructor only normalizes. An empty `topic`
    /// falls back to [`DEFAULT_TOPIC`].
    pub fn new(
        word: &str,
        translation: &str,
        sentence: &str,
        topic: &str,
        tags: Vec<String>,
    ) -> Self {
        let topic = if topic.trim().is_empty() {
            DEFAULT_TOPIC.to_string()
        } else {
            topic.trim().to_string()
        };

        Self {
            id: new_word_id(),
            word: capitalize(word.trim()),
            translation: translation.trim().to_string(),
            sentence: capitalize(sentence.trim()),
            topic,
            tags,
            status: WordStatus::New,
            review_count: 0,
            last_reviewed: None,
            date_added: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Record a correct practice answer: bump the review count and derive
    /// the new status from the mastery threshold.
    pub fn record_correct_answer(&mut self) {
        self.review_count += 1;
        self.status = if self.review_count >= MASTERY_THRESHOLD {
            WordStatus::Mastered
        } else {
            WordStatus::Learning
        };
    }

    /// Case-insensitive tag membership test.
    pub fn has_tag(&self, tag: &str) -> bool {
        let needle = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == needle)
    }

    /// Case-insensitive substring match over word or translation.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.word.to_lowercase().contains(&needle)
            || self.translation.to_lowercase().contains(&needle)
    }
}

/// Split a comma-separated tag string into trimmed, non-empty tags.
///
/// No dedup and no case folding; the collection stores tags as entered.
pub fn parse_tags(tags_text: &str) -> Vec<String> {
    tags_text
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
