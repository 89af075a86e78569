//! A puzzle record: position, optional move script, and attempt history.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{AttemptEntry, Outcome};

/// One reviewable puzzle. The position and move script are opaque to the
/// scheduler and pass through storage verbatim; only `history` is
/// interpreted. Unknown keys in a stored record survive in `extra` so a
/// record written by another tool round-trips losslessly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    #[serde(rename = "FEN")]
    pub fen: String,

    #[serde(rename = "PGN", default)]
    pub pgn: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "previousSolvingTimes", default)]
    pub history: Vec<AttemptEntry>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Puzzle {
    pub fn new(fen: impl Into<String>) -> Self {
        Self {
            fen: fen.into(),
            pgn: String::new(),
            description: None,
            history: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Reconstructs a puzzle from one line of storage.
    pub fn parse(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }

    /// Renders the puzzle as one line of storage.
    pub fn serialize(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Appends a solved attempt with the caller-measured time.
    pub fn mark_solved(&mut self, date: NaiveDate, duration_secs: f64) {
        self.history.push(AttemptEntry::new(date, Outcome::Solved(duration_secs)));
    }

    /// Appends a failed attempt.
    pub fn mark_unsolved(&mut self, date: NaiveDate) {
        self.history.push(AttemptEntry::new(date, Outcome::NotSolved));
    }
}
