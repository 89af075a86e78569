//! Training session: the two-phase walk over the working set.
//!
//! A session first sweeps the working set for puzzles that are due *and*
//! were attempted before (review phase). When that sweep is exhausted it
//! restarts once from the top with the broader due-only predicate
//! (exploratory phase), which admits never-attempted puzzles and may
//! re-admit a puzzle already reviewed this session. A second exhaustion
//! ends the session and saves the working set.
use std::path::PathBuf;

use chrono::NaiveDate;
use log::info;

use super::{Puzzle, Schedule, WorkingSet};
use crate::error::{Result, TrainerError};
use crate::storage;

/// Which sweep the session is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// First sweep: previously-attempted, due puzzles only.
    Review,
    /// Second sweep: everything due, including never-attempted puzzles.
    Exploratory,
}

/// Ticket for the puzzle most recently yielded by [`Session::next_puzzle`].
/// Exactly one of `mark_solved`, `mark_unsolved` or `remove` consumes it;
/// any other use is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PuzzleHandle(usize);

pub struct Session {
    working_set: WorkingSet,
    schedule: Schedule,
    today: NaiveDate,
    out_path: PathBuf,
    cursor: usize,
    phase: Phase,
    current: Option<usize>,
    finished: bool,
}

impl Session {
    /// Starts a session over `working_set`. `today` is the caller's date
    /// (the session owns no clock); `out_path` receives the working set
    /// when the session ends.
    pub fn new(
        working_set: WorkingSet,
        schedule: Schedule,
        today: NaiveDate,
        out_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            working_set,
            schedule,
            today,
            out_path: out_path.into(),
            cursor: 0,
            phase: Phase::Review,
            current: None,
            finished: false,
        }
    }

    /// Yields the next puzzle to present, or `None` when the session is
    /// over. The first `None` saves the working set; later calls are
    /// no-ops. Requesting the next puzzle abandons an unconsumed handle.
    pub fn next_puzzle(&mut self) -> Result<Option<(PuzzleHandle, &Puzzle)>> {
        self.current = None;
        if self.finished {
            return Ok(None);
        }

        loop {
            while self.cursor < self.working_set.len() {
                let index = self.cursor;
                self.cursor += 1;

                let history = &self.working_set.puzzles()[index].history;
                let qualifies = match self.phase {
                    Phase::Review => self.schedule.is_due_review(history, self.today)?,
                    Phase::Exploratory => self.schedule.is_due(history, self.today)?,
                };

                if qualifies {
                    self.current = Some(index);
                    return Ok(Some((PuzzleHandle(index), &self.working_set.puzzles()[index])));
                }
            }

            match self.phase {
                Phase::Review => {
                    // One-time transition: re-sweep everything that is due.
                    info!("review pass finished, sweeping remaining due puzzles");
                    self.phase = Phase::Exploratory;
                    self.cursor = 0;
                }
                Phase::Exploratory => {
                    self.finished = true;
                    storage::save(&self.working_set, &self.out_path)?;
                    return Ok(None);
                }
            }
        }
    }

    /// Records a solved attempt with the caller-measured duration.
    pub fn mark_solved(&mut self, handle: PuzzleHandle, duration_secs: f64) -> Result<()> {
        let index = self.consume(handle)?;
        self.working_set
            .get_mut(index)
            .ok_or(TrainerError::StaleHandle)?
            .mark_solved(self.today, duration_secs);
        Ok(())
    }

    /// Records a failed attempt.
    pub fn mark_unsolved(&mut self, handle: PuzzleHandle) -> Result<()> {
        let index = self.consume(handle)?;
        self.working_set
            .get_mut(index)
            .ok_or(TrainerError::StaleHandle)?
            .mark_unsolved(self.today);
        Ok(())
    }

    /// Drops the current puzzle from the working set for good: it is not
    /// yielded again and is absent from the saved output. The cursor
    /// restarts from the top of the shortened sequence, same phase.
    pub fn remove(&mut self, handle: PuzzleHandle) -> Result<Puzzle> {
        let index = self.consume(handle)?;
        self.cursor = 0;
        Ok(self.working_set.remove(index))
    }

    /// Saves the working set to the session's output path. Called
    /// automatically at end of session; callers quitting early use this.
    pub fn save(&self) -> Result<()> {
        storage::save(&self.working_set, &self.out_path)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn working_set(&self) -> &WorkingSet {
        &self.working_set
    }

    fn consume(&mut self, handle: PuzzleHandle) -> Result<usize> {
        match self.current {
            Some(index) if index == handle.0 => {
                self.current = None;
                Ok(index)
            }
            _ => Err(TrainerError::StaleHandle),
        }
    }
}
