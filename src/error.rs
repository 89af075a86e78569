//! Error taxonomy for the trainer core.
use std::path::PathBuf;

/// Error type for loading, scheduling and session operations.
#[derive(Debug, thiserror::Error)]
pub enum TrainerError {
    #[error("cannot open puzzle file '{path}': {source}")]
    Load {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed puzzle on line {line} of '{path}': {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },

    #[error("failed to encode puzzle record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("cannot write puzzle file '{path}': {source}")]
    Save {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The level fold produced a level the schedule has no interval for.
    /// Due-ness is undecidable at that point, so this is fatal.
    #[error("no schedule interval for level {level} (schedule ends at level {max})")]
    ScheduleGap { level: u32, max: u32 },

    /// A mark/remove call used a handle that is not the current puzzle.
    #[error("puzzle handle does not refer to the current puzzle")]
    StaleHandle,
}

pub type Result<T> = std::result::Result<T, TrainerError>;
