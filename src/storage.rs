//! Line-oriented puzzle storage.
//!
//! The persisted format is one JSON record per line. Saving also produces
//! a `<path>_solvingtimes` dump with one plain-text history per record for
//! eyeballing; that file is diagnostic only and is never read back.
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Result, TrainerError};
use crate::models::{Puzzle, WorkingSet};

/// Reads one puzzle per line and returns the working set in randomized
/// order. The first malformed line aborts the whole load.
pub fn load(path: &Path) -> Result<WorkingSet> {
    let file = File::open(path).map_err(|source| TrainerError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let mut puzzles = Vec::new();
    for (number, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| TrainerError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let puzzle = Puzzle::parse(&line).map_err(|source| TrainerError::Parse {
            path: path.to_path_buf(),
            line: number + 1,
            source,
        })?;
        puzzles.push(puzzle);
    }

    info!("loaded {} puzzles from '{}'", puzzles.len(), path.display());
    let mut set = WorkingSet::new(puzzles);
    set.shuffle();
    Ok(set)
}

/// Writes the working set back out, one line per surviving puzzle in the
/// set's current order, plus the solving-times dump. Both files are
/// written to a temporary sibling and renamed into place, so an
/// interrupted save never truncates the previous state.
pub fn save(set: &WorkingSet, path: &Path) -> Result<()> {
    info!("saving {} puzzles to '{}'", set.len(), path.display());

    let mut lines = String::new();
    let mut dump = String::new();
    for puzzle in set.iter() {
        lines.push_str(&puzzle.serialize()?);
        lines.push('\n');
        dump.push_str(&format!("{:?}\n", puzzle.history));
    }

    write_atomically(path, &lines)?;
    write_atomically(&sibling(path, "_solvingtimes"), &dump)?;
    Ok(())
}

fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let save_err = |source| TrainerError::Save {
        path: path.to_path_buf(),
        source,
    };

    let tmp = sibling(path, ".tmp");
    let mut writer = BufWriter::new(File::create(&tmp).map_err(save_err)?);
    writer.write_all(contents.as_bytes()).map_err(save_err)?;
    writer.flush().map_err(save_err)?;
    fs::rename(&tmp, path).map_err(save_err)
}

/// Appends `suffix` to a file name, e.g. `puzzles/set1` -> `puzzles/set1.tmp`.
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
