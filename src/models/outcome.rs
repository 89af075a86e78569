//! Attempt outcomes and the history entries built from them.
//!
//! On the wire a history entry is the original trainer's two-element array
//! `["YYYY-MM-DD", <seconds>]` for a solved attempt or
//! `["YYYY-MM-DD", "not solved"]` for a failed one.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Literal token used in storage for a failed attempt.
pub const NOT_SOLVED_TOKEN: &str = "not solved";

/// Result of one attempt at a puzzle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// Solved, with the time the caller measured for it (seconds).
    Solved(f64),
    NotSolved,
}

/// One dated attempt. Entries are appended in chronological order and
/// never re-sorted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EntryRepr", into = "EntryRepr")]
pub struct AttemptEntry {
    pub date: NaiveDate,
    pub outcome: Outcome,
}

impl AttemptEntry {
    pub fn new(date: NaiveDate, outcome: Outcome) -> Self {
        Self { date, outcome }
    }
}

/// Wire form of an entry: a `[date, outcome]` pair where the outcome slot
/// holds either a number of seconds or the "not solved" token.
#[derive(Serialize, Deserialize)]
struct EntryRepr(String, OutcomeRepr);

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum OutcomeRepr {
    Seconds(f64),
    Token(String),
}

impl From<AttemptEntry> for EntryRepr {
    fn from(entry: AttemptEntry) -> Self {
        let outcome = match entry.outcome {
            Outcome::Solved(secs) => OutcomeRepr::Seconds(secs),
            Outcome::NotSolved => OutcomeRepr::Token(NOT_SOLVED_TOKEN.to_string()),
        };
        EntryRepr(entry.date.format("%Y-%m-%d").to_string(), outcome)
    }
}

impl TryFrom<EntryRepr> for AttemptEntry {
    type Error = String;

    fn try_from(repr: EntryRepr) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(&repr.0, "%Y-%m-%d")
            .map_err(|e| format!("invalid attempt date '{}': {}", repr.0, e))?;

        let outcome = match repr.1 {
            OutcomeRepr::Seconds(secs) if secs >= 0.0 => Outcome::Solved(secs),
            OutcomeRepr::Seconds(secs) => {
                return Err(format!("negative solving time {}", secs));
            }
            OutcomeRepr::Token(token) if token == NOT_SOLVED_TOKEN => Outcome::NotSolved,
            OutcomeRepr::Token(token) => {
                return Err(format!("unknown outcome token '{}'", token));
            }
        };

        Ok(AttemptEntry { date, outcome })
    }
}
