//! Repetition schedule and due-date predicates.
use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::level::mastery_level;
use super::AttemptEntry;
use crate::error::{Result, TrainerError};

/// Maps a mastery level to the minimum number of days before the puzzle
/// comes up again, plus the solving-time threshold the level fold uses.
#[derive(Clone, Debug)]
pub struct Schedule {
    wait_days: BTreeMap<u32, i64>,
    threshold_secs: f64,
}

impl Default for Schedule {
    /// The original trainer's configuration: a puzzle at level 6 rests for
    /// 300 days; solves over two minutes count as slow.
    fn default() -> Self {
        Self::new([(1, 1), (2, 2), (3, 10), (4, 30), (5, 90), (6, 300)], 120.0)
    }
}

impl Schedule {
    pub fn new(wait_days: impl IntoIterator<Item = (u32, i64)>, threshold_secs: f64) -> Self {
        Self {
            wait_days: wait_days.into_iter().collect(),
            threshold_secs,
        }
    }

    pub fn threshold_secs(&self) -> f64 {
        self.threshold_secs
    }

    /// Level for a present (possibly empty) history.
    pub fn level(&self, history: &[AttemptEntry]) -> u32 {
        mastery_level(Some(history), self.threshold_secs)
    }

    /// Minimum rest days for a level. A level outside the table is a
    /// configuration error, never a clamp.
    pub fn wait_days(&self, level: u32) -> Result<i64> {
        self.wait_days
            .get(&level)
            .copied()
            .ok_or(TrainerError::ScheduleGap {
                level,
                max: self.wait_days.keys().next_back().copied().unwrap_or(0),
            })
    }

    /// True iff the puzzle has been attempted before, whatever the outcome.
    pub fn was_attempted(&self, history: &[AttemptEntry]) -> bool {
        !history.is_empty()
    }

    /// True iff the puzzle should be presented today. Never-attempted and
    /// level-0 puzzles are always due; otherwise enough days must have
    /// passed since the last attempt.
    pub fn is_due(&self, history: &[AttemptEntry], today: NaiveDate) -> Result<bool> {
        let Some(last) = history.last() else {
            return Ok(true);
        };

        let level = self.level(history);
        if level == 0 {
            return Ok(true);
        }

        let elapsed_days = (today - last.date).num_days();
        Ok(elapsed_days >= self.wait_days(level)?)
    }

    /// True iff the puzzle is due *and* has been seen before. This is the
    /// review-phase predicate; brand-new puzzles are deliberately excluded.
    pub fn is_due_review(&self, history: &[AttemptEntry], today: NaiveDate) -> Result<bool> {
        Ok(self.is_due(history, today)? && self.was_attempted(history))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn solved_on(day: &str, secs: f64) -> AttemptEntry {
        AttemptEntry::new(date(day), Outcome::Solved(secs))
    }

    fn failed_on(day: &str) -> AttemptEntry {
        AttemptEntry::new(date(day), Outcome::NotSolved)
    }

    #[test]
    fn test_empty_history_always_due() {
        let schedule = Schedule::default();
        assert!(schedule.is_due(&[], date("2023-01-01")).unwrap());
        assert!(!schedule.was_attempted(&[]));
        assert!(!schedule.is_due_review(&[], date("2023-01-01")).unwrap());
    }

    #[test]
    fn test_level_zero_always_due() {
        let schedule = Schedule::default();
        let history = [failed_on("2023-01-01")];
        assert_eq!(schedule.level(&history), 0);
        // Due on the very same day, no rest period applies.
        assert!(schedule.is_due(&history, date("2023-01-01")).unwrap());
        assert!(schedule.is_due_review(&history, date("2023-01-01")).unwrap());
    }

    #[test]
    fn test_due_once_enough_days_elapsed() {
        let schedule = Schedule::default();
        // Level 2 after one fast solve, so the rest period is 2 days.
        let history = [solved_on("2023-01-01", 5.0)];
        assert!(!schedule.is_due(&history, date("2023-01-02")).unwrap());
        assert!(schedule.is_due(&history, date("2023-01-03")).unwrap());
        assert!(schedule.is_due(&history, date("2023-02-01")).unwrap());
    }

    #[test]
    fn test_elapsed_days_measured_from_last_attempt() {
        let schedule = Schedule::default();
        // Levels 2, 3 -> 10 rest days counted from Jan 5.
        let history = [solved_on("2023-01-01", 5.0), solved_on("2023-01-05", 5.0)];
        assert!(!schedule.is_due(&history, date("2023-01-14")).unwrap());
        assert!(schedule.is_due(&history, date("2023-01-15")).unwrap());
    }

    #[test]
    fn test_review_predicate_excludes_fresh_puzzles() {
        let schedule = Schedule::default();
        let history = [solved_on("2023-01-01", 5.0)];
        assert!(schedule.is_due_review(&history, date("2023-03-01")).unwrap());
        assert!(!schedule.is_due_review(&[], date("2023-03-01")).unwrap());
    }

    #[test]
    fn test_level_beyond_schedule_is_fatal() {
        // Only levels 1 and 2 are configured; three fast solves reach 4.
        let schedule = Schedule::new([(1, 1), (2, 2)], 120.0);
        let history = [
            solved_on("2023-01-01", 5.0),
            solved_on("2023-01-02", 5.0),
            solved_on("2023-01-03", 5.0),
        ];
        let err = schedule.is_due(&history, date("2023-06-01")).unwrap_err();
        match err {
            TrainerError::ScheduleGap { level, max } => {
                assert_eq!(level, 4);
                assert_eq!(max, 2);
            }
            other => panic!("expected ScheduleGap, got {other:?}"),
        }
    }
}
