//! Statistics derived from the review history.
//!
//! `ReviewSummary::compute` is a pure function of the ledger: nothing here
//! is persisted, and the dashboard recomputes it on every render. Two
//! rules are deliberate contracts inherited from the data format and must
//! not be "fixed":
//!
//! - Only correct events count toward a day's total for streak and
//!   best-day purposes; incorrect answers never advance either.
//! - The streak threshold is the *current* daily goal, applied
//!   retroactively to historical days.

use std::collections::HashMap;

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ReviewEvent;

/// Furthest the streak walk looks back, in days.
const STREAK_LOOKBACK_DAYS: u64 = 365;

/// The day with the most correct reviews.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayCount {
    /// Day, `"%Y-%m-%d"`.
    pub date: String,
    /// Correct reviews on that day.
    pub count: u32,
}

/// Per-test-type accuracy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypeAccuracy {
    /// The `testType` tag grouped on.
    pub test_type: String,
    /// `floor(100 * correct / total)`.
    pub percent: u32,
    pub correct: u32,
    pub total: u32,
}

/// Aggregated view of the review history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReviewSummary {
    /// Total events in the ledger, correct and incorrect.
    pub total_reviews: usize,
    /// Consecutive days (today backwards) meeting the daily goal.
    pub streak: u32,
    /// Day with the most correct reviews; ties go to the earliest-seen day.
    pub best_day: Option<DayCount>,
    /// Accuracy per test type, in first-occurrence order.
    pub accuracy_by_type: Vec<TypeAccuracy>,
}

impl ReviewSummary {
    /// Compute the summary for the current day.
    pub fn compute_today(events: &[ReviewEvent], daily_goal: u32) -> Self {
        Self::compute(events, daily_goal, Utc::now().date_naive())
    }

    /// Compute the summary with an explicit "today".
    pub fn compute(events: &[ReviewEvent], daily_goal: u32, today: NaiveDate) -> Self {
        let total_reviews = events.len();

        // Correct-only counts per day, remembering first-occurrence order
        // so best-day ties resolve the way the history reads.
        let mut daily_correct: HashMap<&str, u32> = HashMap::new();
        let mut day_order: Vec<&str> = Vec::new();
        for event in events {
            if event.is_correct() && !event.date.is_empty() {
                let counter = daily_correct.entry(event.date.as_str()).or_insert_with(|| {
                    day_order.push(event.date.as_str());
                    0
                });
                *counter += 1;
            }
        }

        // Streak: walk backward from today, stop at the first day that
        // falls short of the goal (today included).
        let mut streak = 0;
        for offset in 0..STREAK_LOOKBACK_DAYS {
            let Some(day) = today.checked_sub_days(Days::new(offset)) else {
                break;
            };
            let key = day.format("%Y-%m-%d").to_string();
            if daily_correct.get(key.as_str()).copied().unwrap_or(0) >= daily_goal {
                streak += 1;
            } else {
                break;
            }
        }

        let mut best_day: Option<DayCount> = None;
        for date in &day_order {
            let count = daily_correct[date];
            if best_day.as_ref().map_or(true, |best| count > best.count) {
                best_day = Some(DayCount {
                    date: date.to_string(),
                    count,
                });
            }
        }

        // All events, correct and incorrect, grouped by test type.
        let mut type_counts: HashMap<&str, (u32, u32)> = HashMap::new();
        let mut type_order: Vec<&str> = Vec::new();
        for event in events {
            let entry = type_counts
                .entry(event.test_type.as_str())
                .or_insert_with(|| {
                    type_order.push(event.test_type.as_str());
                    (0, 0)
                });
            entry.1 += 1;
            if event.is_correct() {
                entry.0 += 1;
            }
        }

        let accuracy_by_type = type_order
            .iter()
            .map(|test_type| {
                let (correct, total) = type_counts[test_type];
                TypeAccuracy {
                    test_type: test_type.to_string(),
                    percent: if total > 0 { correct * 100 / total } else { 0 },
                    correct,
                    total,
                }
            })
            .collect();

        Self {
            total_reviews,
            streak,
            best_day,
            accuracy_by_type,
        }
    }
}

/// Session-score tracking for the lifetime of the process.
///
/// Neither field is persisted; both reset to zero on restart, exactly like
/// the in-memory dashboard counters they model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PracticeStats {
    /// Highest session score seen this process.
    pub best_score: u32,
    /// Smoothed score. NOT a running mean: each session halves the
    /// distance to the latest score. Preserved as a behavioral contract.
    pub average_score: u32,
}

impl PracticeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished session's score into the stats.
    pub fn record_session(&mut self, score: u32) {
        self.best_score = self.best_score.max(score);
        self.average_score = if self.average_score == 0 {
            score
        } else {
            (self.average_score + score) / 2
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ReviewOutcome, TEST_TYPE_PRACTICE};

    fn event_on(date: &str, correct: bool, test_type: &str) -> ReviewEvent {
        ReviewEvent {
            date: date.to_string(),
            word_id: "Mot".to_string(),
            result: ReviewOutcome::from_correct(correct),
            test_type: test_type.to_string(),
            session_id: String::new(),
            timestamp: String::new(),
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_ledger() {
        let summary = ReviewSummary::compute(&[], 10, day("2026-08-05"));

        assert_eq!(summary.total_reviews, 0);
        assert_eq!(summary.streak, 0);
        assert!(summary.best_day.is_none());
        assert!(summary.accuracy_by_type.is_empty());
    }

    #[test]
    fn test_streak_zero_without_correct_events() {
        let events = vec![
            event_on("2026-08-05", false, TEST_TYPE_PRACTICE),
            event_on("2026-08-05", false, TEST_TYPE_PRACTICE),
        ];
        let summary = ReviewSummary::compute(&events, 1, day("2026-08-05"));

        assert_eq!(summary.streak, 0);
        assert!(summary.best_day.is_none());
    }

    #[test]
    fn test_streak_consecutive_days_meeting_goal() {
        // Goal of 2: three consecutive days meet it, the fourth back falls
        // short with a single correct answer.
        let mut events = Vec::new();
        for date in ["2026-08-05", "2026-08-04", "2026-08-03"] {
            events.push(event_on(date, true, TEST_TYPE_PRACTICE));
            events.push(event_on(date, true, TEST_TYPE_PRACTICE));
        }
        events.push(event_on("2026-08-02", true, TEST_TYPE_PRACTICE));

        let summary = ReviewSummary::compute(&events, 2, day("2026-08-05"));
        assert_eq!(summary.streak, 3);
    }

    #[test]
    fn test_streak_broken_today() {
        // Yesterday met the goal, but the walk starts at today.
        let events = vec![
            event_on("2026-08-04", true, TEST_TYPE_PRACTICE),
            event_on("2026-08-04", true, TEST_TYPE_PRACTICE),
        ];
        let summary = ReviewSummary::compute(&events, 1, day("2026-08-05"));
        assert_eq!(summary.streak, 0);
    }

    #[test]
    fn test_streak_incorrect_answers_do_not_count() {
        let events = vec![
            event_on("2026-08-05", true, TEST_TYPE_PRACTICE),
            event_on("2026-08-05", false, TEST_TYPE_PRACTICE),
        ];
        // Goal of 2: one correct + one incorrect falls short.
        let summary = ReviewSummary::compute(&events, 2, day("2026-08-05"));
        assert_eq!(summary.streak, 0);
    }

    #[test]
    fn test_streak_uses_current_goal_retroactively() {
        let events = vec![
            event_on("2026-08-05", true, TEST_TYPE_PRACTICE),
            event_on("2026-08-04", true, TEST_TYPE_PRACTICE),
        ];

        let relaxed = ReviewSummary::compute(&events, 1, day("2026-08-05"));
        assert_eq!(relaxed.streak, 2);

        let strict = ReviewSummary::compute(&events, 2, day("2026-08-05"));
        assert_eq!(strict.streak, 0);
    }

    #[test]
    fn test_best_day_maximum() {
        let events = vec![
            event_on("2026-08-03", true, TEST_TYPE_PRACTICE),
            event_on("2026-08-04", true, TEST_TYPE_PRACTICE),
            event_on("2026-08-04", true, TEST_TYPE_PRACTICE),
            event_on("2026-08-05", true, TEST_TYPE_PRACTICE),
        ];
        let summary = ReviewSummary::compute(&events, 10, day("2026-08-05"));

        let best = summary.best_day.unwrap();
        assert_eq!(best.date, "2026-08-04");
        assert_eq!(best.count, 2);
    }

    #[test]
    fn test_best_day_tie_goes_to_first_seen() {
        let events = vec![
            event_on("2026-08-02", true, TEST_TYPE_PRACTICE),
            event_on("2026-08-03", true, TEST_TYPE_PRACTICE),
        ];
        let summary = ReviewSummary::compute(&events, 10, day("2026-08-05"));

        assert_eq!(summary.best_day.unwrap().date, "2026-08-02");
    }

    #[test]
    fn test_accuracy_by_type() {
        let events = vec![
            event_on("2026-08-05", true, TEST_TYPE_PRACTICE),
            event_on("2026-08-05", true, TEST_TYPE_PRACTICE),
            event_on("2026-08-05", true, TEST_TYPE_PRACTICE),
            event_on("2026-08-05", false, TEST_TYPE_PRACTICE),
        ];
        let summary = ReviewSummary::compute(&events, 10, day("2026-08-05"));

        assert_eq!(summary.accuracy_by_type.len(), 1);
        let practice = &summary.accuracy_by_type[0];
        assert_eq!(practice.test_type, TEST_TYPE_PRACTICE);
        assert_eq!(practice.percent, 75);
        assert_eq!(practice.correct, 3);
        assert_eq!(practice.total, 4);
    }

    #[test]
    fn test_accuracy_floors() {
        let events = vec![
            event_on("2026-08-05", true, TEST_TYPE_PRACTICE),
            event_on("2026-08-05", false, TEST_TYPE_PRACTICE),
            event_on("2026-08-05", false, TEST_TYPE_PRACTICE),
        ];
        let summary = ReviewSummary::compute(&events, 10, day("2026-08-05"));

        // 1/3 floors to 33
        assert_eq!(summary.accuracy_by_type[0].percent, 33);
    }

    #[test]
    fn test_accuracy_groups_types_in_first_occurrence_order() {
        let events = vec![
            event_on("2026-08-05", true, "practice"),
            event_on("2026-08-05", false, "listening"),
            event_on("2026-08-05", true, "practice"),
        ];
        let summary = ReviewSummary::compute(&events, 10, day("2026-08-05"));

        let types: Vec<&str> = summary
            .accuracy_by_type
            .iter()
            .map(|a| a.test_type.as_str())
            .collect();
        assert_eq!(types, vec!["practice", "listening"]);
        assert_eq!(summary.accuracy_by_type[0].percent, 100);
        assert_eq!(summary.accuracy_by_type[1].percent, 0);
    }

    #[test]
    fn test_total_reviews_counts_everything() {
        let events = vec![
            event_on("2026-08-05", true, TEST_TYPE_PRACTICE),
            event_on("2026-08-05", false, TEST_TYPE_PRACTICE),
        ];
        let summary = ReviewSummary::compute(&events, 10, day("2026-08-05"));
        assert_eq!(summary.total_reviews, 2);
    }

    #[test]
    fn test_practice_stats_sequence() {
        // The documented sequence: sessions scoring 80, 40, 100 starting
        // from a zero average yield 80, 60, 80.
        let mut stats = PracticeStats::new();

        stats.record_session(80);
        assert_eq!(stats.average_score, 80);
        assert_eq!(stats.best_score, 80);

        stats.record_session(40);
        assert_eq!(stats.average_score, 60);
        assert_eq!(stats.best_score, 80);

        stats.record_session(100);
        assert_eq!(stats.average_score, 80);
        assert_eq!(stats.best_score, 100);
    }

    #[test]
    fn test_practice_stats_average_floors() {
        let mut stats = PracticeStats::new();
        stats.record_session(75);
        stats.record_session(50);
        // (75 + 50) / 2 = 62.5, floored
        assert_eq!(stats.average_score, 62);
    }

    #[test]
    fn test_practice_stats_zero_score_first() {
        let mut stats = PracticeStats::new();
        stats.record_session(0);
        assert_eq!(stats.average_score, 0);
        assert_eq!(stats.best_score, 0);

        // A zero average is treated as "no history": the next score
        // replaces it outright.
        stats.record_session(50);
        assert_eq!(stats.average_score, 50);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the smoothed average never exceeds the best score.
            #[test]
            fn prop_average_never_exceeds_best(
                scores in prop::collection::vec(0u32..=100, 1..20)
            ) {
                let mut stats = PracticeStats::new();
                for score in scores {
                    stats.record_session(score);
                }
                prop_assert!(stats.average_score <= stats.best_score);
            }

            /// Property: per-type accuracy is always a percentage and
            /// every event is counted.
            #[test]
            fn prop_accuracy_within_bounds(
                outcomes in prop::collection::vec(any::<bool>(), 1..40)
            ) {
                let events: Vec<ReviewEvent> = outcomes
                    .iter()
                    .map(|&correct| event_on("2026-08-05", correct, TEST_TYPE_PRACTICE))
                    .collect();

                let summary = ReviewSummary::compute(&events, 10, day("2026-08-05"));

                prop_assert_eq!(summary.total_reviews, events.len());
                prop_assert_eq!(summary.accuracy_by_type.len(), 1);
                let accuracy = &summary.accuracy_by_type[0];
                prop_assert!(accuracy.percent <= 100);
                prop_assert_eq!(accuracy.total as usize, events.len());
            }
        }
    }
}
