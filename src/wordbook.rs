//! The word collection and its operations.
//!
//! `Wordbook` owns the in-memory collection and writes through to its
//! store after every mutation. Loading and saving are fail-soft: a broken
//! or missing backing document degrades to an empty collection and a
//! warning, never a user-facing failure.

use crate::core::{parse_tags, WordRecord, WordStatus, DEFAULT_TOPIC};
use crate::error::FailSoft;
use crate::storage::RecordStore;

/// Topic selector meaning "no topic filter".
pub const ALL_TOPICS: &str = "All";

/// Conjunction filter over the collection.
///
/// Absent or empty predicates match everything; present ones must all
/// hold.
#[derive(Debug, Clone, Default)]
pub struct WordFilter {
    /// Exact topic match. `None`, empty, or the [`ALL_TOPICS`] sentinel
    /// match every topic.
    pub topic: Option<String>,
    /// Case-insensitive tag membership.
    pub tag: Option<String>,
    /// Exact status match.
    pub status: Option<WordStatus>,
    /// Case-insensitive substring over word or translation.
    pub search: Option<String>,
}

impl WordFilter {
    /// Check whether a record passes every present predicate.
    pub fn matches(&self, record: &WordRecord) -> bool {
        if let Some(topic) = &self.topic {
            if !topic.is_empty() && topic != ALL_TOPICS && record.topic != *topic {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !tag.is_empty() && !record.has_tag(tag) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        if let Some(search) = &self.search {
            if !search.is_empty() && !record.matches_search(search) {
                return false;
            }
        }
        true
    }
}

/// The word store: in-memory collection plus write-through persistence.
#[derive(Debug)]
pub struct Wordbook<S: RecordStore<WordRecord>> {
    words: Vec<WordRecord>,
    store: S,
}

impl<S: RecordStore<WordRecord>> Wordbook<S> {
    /// Load the collection from the store.
    ///
    /// Any read or parse failure degrades to an empty collection.
    pub fn load(store: S) -> Self {
        let words = store.load().recover_default("loading word collection");
        Self { words, store }
    }

    /// All records, in insertion order.
    pub fn words(&self) -> &[WordRecord] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a record by its stable id.
    pub fn get(&self, id: &str) -> Option<&WordRecord> {
        self.words.iter().find(|w| w.id == id)
    }

    /// Add a word to the collection.
    ///
    /// Returns `None` (a silent no-op) when the word or translation trims
    /// empty. Tags are comma-split and trimmed; word and sentence are
    /// display-capitalized. The collection is persisted before returning.
    pub fn add(
        &mut self,
        word: &str,
        translation: &str,
        sentence: &str,
        topic: &str,
        tags_text: &str,
    ) -> Option<&WordRecord> {
        if word.trim().is_empty() || translation.trim().is_empty() {
            return None;
        }

        let record = WordRecord::new(word, translation, sentence, topic, parse_tags(tags_text));
        self.words.push(record);
        self.persist();
        self.words.last()
    }

    /// Remove the record with the given id.
    ///
    /// Returns `false` (a no-op, not an error) when no record has that id.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.words.iter().position(|w| w.id == id) else {
            return false;
        };
        self.words.remove(index);
        self.persist();
        true
    }

    /// Records whose word or translation contains the term,
    /// case-insensitively. Used by the delete flow to locate candidates.
    pub fn find(&self, term: &str) -> Vec<&WordRecord> {
        if term.trim().is_empty() {
            return Vec::new();
        }
        self.words
            .iter()
            .filter(|w| w.matches_search(term.trim()))
            .collect()
    }

    /// Rewrite the topic on every record currently under `old`.
    ///
    /// Renaming to an empty string is a silent no-op. Returns the number
    /// of records rewritten; the collection is persisted once.
    pub fn rename_topic(&mut self, old: &str, new: &str) -> usize {
        let new = new.trim();
        if new.is_empty() {
            return 0;
        }

        let mut renamed = 0;
        for word in &mut self.words {
            if word.topic == old {
                word.topic = new.to_string();
                renamed += 1;
            }
        }
        if renamed > 0 {
            self.persist();
        }
        renamed
    }

    /// Reset every record under `topic` back to the default topic.
    ///
    /// Returns the number of records rewritten; persisted once.
    pub fn clear_topic(&mut self, topic: &str) -> usize {
        let mut cleared = 0;
        for word in &mut self.words {
            if word.topic == topic {
                word.topic = DEFAULT_TOPIC.to_string();
                cleared += 1;
            }
        }
        if cleared > 0 {
            self.persist();
        }
        cleared
    }

    /// Distinct topic values, lexicographically sorted.
    pub fn topics(&self) -> Vec<String> {
        let mut topics: Vec<String> = self.words.iter().map(|w| w.topic.clone()).collect();
        topics.sort();
        topics.dedup();
        topics
    }

    /// Records passing every present predicate, in insertion order.
    pub fn filter(&self, filter: &WordFilter) -> Vec<&WordRecord> {
        self.words.iter().filter(|w| filter.matches(w)).collect()
    }

    /// The first `min(daily_goal, len)` records in insertion order.
    ///
    /// A positional slice, deliberately not randomized or recency-based.
    pub fn today_words(&self, daily_goal: u32) -> &[WordRecord] {
        let count = (daily_goal as usize).min(self.words.len());
        &self.words[..count]
    }

    /// Quiz population for a topic selector.
    ///
    /// The [`ALL_TOPICS`] sentinel selects the whole collection.
    pub fn words_for_quiz(&self, topic: &str) -> Vec<&WordRecord> {
        if topic == ALL_TOPICS {
            self.words.iter().collect()
        } else {
            self.words.iter().filter(|w| w.topic == topic).collect()
        }
    }

    /// Record a practice answer against a word and persist the collection.
    ///
    /// A correct answer bumps the word's review count and derives its new
    /// status; an incorrect answer changes nothing on the record. The
    /// collection is persisted either way. Returns `false` when the id is
    /// unknown (the record was deleted mid-session).
    pub fn record_answer(&mut self, id: &str, correct: bool) -> bool {
        let Some(word) = self.words.iter_mut().find(|w| w.id == id) else {
            return false;
        };
        if correct {
            word.record_correct_answer();
        }
        self.persist();
        true
    }

    /// Write the collection through to the store, degrading to a warning
    /// on failure.
    fn persist(&self) {
        self.store
            .save(&self.words)
            .recover_default("saving word collection");
    }
}
