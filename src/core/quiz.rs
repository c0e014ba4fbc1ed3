//! Quiz session state machine.
//!
//! A session moves Idle → InSession → Finished: `start` returns `None`
//! when the topic has no words (the Idle terminal no-op), `next_question`
//! draws until the sample is exhausted, and `submit_answer` scores one
//! answer, updating both the word collection and the review ledger through
//! their own write-through paths.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{ReviewEvent, WordRecord, TEST_TYPE_PRACTICE};
use crate::error::{LexiError, Result};
use crate::ledger::ReviewLedger;
use crate::storage::RecordStore;
use crate::wordbook::Wordbook;

/// Maximum words sampled into one session.
pub const MAX_QUIZ_WORDS: usize = 10;

/// Which way a question asks.
///
/// Re-rolled independently for every question, never fixed per word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Prompt with the word, expect the translation.
    WordToTranslation,
    /// Prompt with the translation, expect the word.
    TranslationToWord,
}

/// The question currently awaiting an answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Text shown to the user.
    pub prompt: String,
    /// Answer compared against, trimmed and case-insensitive.
    pub expected: String,
    pub direction: Direction,
}

/// What happened to one submitted answer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerFeedback {
    pub correct: bool,
    /// The answer that was expected, for display on a miss.
    pub expected: String,
}

/// One practice run over a sampled word subset.
#[derive(Debug)]
pub struct QuizSession {
    words: Vec<WordRecord>,
    index: usize,
    correct: usize,
    current: Option<Question>,
}

impl QuizSession {
    /// Start a session over the given topic selector.
    ///
    /// Returns `None` when the filtered population is empty: no session is
    /// created and nothing anywhere is mutated. Otherwise samples
    /// `min(10, population)` words uniformly without replacement, in
    /// random order.
    pub fn start<S: RecordStore<WordRecord>>(
        wordbook: &Wordbook<S>,
        topic: &str,
        rng: &mut impl Rng,
    ) -> Option<Self> {
        let population = wordbook.words_for_quiz(topic);
        if population.is_empty() {
            return None;
        }

        let size = MAX_QUIZ_WORDS.min(population.len());
        let mut words: Vec<WordRecord> = population
            .choose_multiple(rng, size)
            .map(|w| (*w).clone())
            .collect();
        words.shuffle(rng);

        Some(Self {
            words,
            index: 0,
            correct: 0,
            current: None,
        })
    }

    /// Draw the question for the current word, re-rolling its direction.
    ///
    /// Returns `None` once every sampled word has been answered (the
    /// session is finished). Calling again before an answer re-rolls the
    /// direction for the same word.
    pub fn next_question(&mut self, rng: &mut impl Rng) -> Option<&Question> {
        if self.index >= self.words.len() {
            self.current = None;
            return None;
        }

        let word = &self.words[self.index];
        let question = if rng.random_bool(0.5) {
            Question {
                prompt: format!("What is the translation of: '{}'?", word.word),
                expected: word.translation.clone(),
                direction: Direction::WordToTranslation,
            }
        } else {
            Question {
                prompt: format!("What is the word for: '{}'?", word.translation),
                expected: word.word.clone(),
                direction: Direction::TranslationToWord,
            }
        };

        self.current = Some(question);
        self.current.as_ref()
    }

    /// Score one submitted answer.
    ///
    /// Whitespace-only input is a no-op: `Ok(None)`, the session does not
    /// advance and nothing is recorded. Otherwise the trimmed input is
    /// compared case-insensitively against the expected answer, the word
    /// collection and the ledger are updated, and the session advances.
    pub fn submit_answer<W, L>(
        &mut self,
        answer: &str,
        wordbook: &mut Wordbook<W>,
        ledger: &mut ReviewLedger<L>,
    ) -> Result<Option<AnswerFeedback>>
    where
        W: RecordStore<WordRecord>,
        L: RecordStore<ReviewEvent>,
    {
        let Some(question) = self.current.take() else {
            return Err(LexiError::invalid_state(
                "no question drawn; call next_question first",
            ));
        };

        let answer = answer.trim();
        if answer.is_empty() {
            self.current = Some(question);
            return Ok(None);
        }

        let correct = answer.to_lowercase() == question.expected.to_lowercase();
        if correct {
            self.correct += 1;
        }

        let word = &self.words[self.index];
        ledger.append(&word.word, correct, TEST_TYPE_PRACTICE);
        wordbook.record_answer(&word.id, correct);

        self.index += 1;
        Ok(Some(AnswerFeedback {
            correct,
            expected: question.expected,
        }))
    }

    /// Whether every sampled word has been answered.
    pub fn is_finished(&self) -> bool {
        self.index >= self.words.len()
    }

    /// Session score as a percentage, rounded.
    pub fn score(&self) -> u32 {
        if self.words.is_empty() {
            return 0;
        }
        ((self.correct as f64 / self.words.len() as f64) * 100.0).round() as u32
    }

    /// 1-based number of the question currently asked.
    pub fn position(&self) -> usize {
        (self.index + 1).min(self.words.len())
    }

    /// Number of words in the sample.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Correct answers so far.
    pub fn correct(&self) -> usize {
        self.correct
    }
}
