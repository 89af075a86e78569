//! The mutable puzzle collection a session works through.
use rand::seq::SliceRandom;

use super::Puzzle;

/// Owns the puzzles of one session. Identity is positional: two puzzles
/// with identical content are still distinct entries. The order is fixed
/// once shuffled, except that removals collapse the sequence.
#[derive(Clone, Debug, Default)]
pub struct WorkingSet {
    puzzles: Vec<Puzzle>,
}

impl WorkingSet {
    pub fn new(puzzles: Vec<Puzzle>) -> Self {
        Self { puzzles }
    }

    /// Randomizes the presentation order. Called once at load time.
    pub fn shuffle(&mut self) {
        self.puzzles.shuffle(&mut rand::thread_rng());
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Puzzle> {
        self.puzzles.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Puzzle> {
        self.puzzles.get_mut(index)
    }

    /// Deletes the puzzle at `index` and collapses the sequence.
    pub fn remove(&mut self, index: usize) -> Puzzle {
        self.puzzles.remove(index)
    }

    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Puzzle> {
        self.puzzles.iter()
    }
}
