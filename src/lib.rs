pub mod error;
pub mod models;
pub mod storage;

pub use error::{Result, TrainerError};
pub use models::{
    AttemptEntry, Outcome, Phase, Puzzle, PuzzleHandle, Schedule, Session, WorkingSet,
};
