pub mod level;
pub mod outcome;
pub mod puzzle;
pub mod schedule;
pub mod session;
pub mod working_set;

pub use level::mastery_level;
pub use outcome::{AttemptEntry, Outcome, NOT_SOLVED_TOKEN};
pub use puzzle::Puzzle;
pub use schedule::Schedule;
pub use session::{Phase, PuzzleHandle, Session};
pub use working_set::WorkingSet;
