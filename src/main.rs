//! Interactive terminal front end for the puzzle trainer.
//!
//! Owns everything the scheduling core leaves to the caller: finding the
//! numbered session files inside a folder, timing each attempt, driving
//! the session with single-letter commands, and logging the total
//! training time.
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use chrono::Local;
use puzzle_trainer::{storage, Result, Schedule, Session, TrainerError};

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let folder = prompt("Name of folder: ");
    let folder = folder.trim();

    let Some((input, output)) = find_session_files(Path::new(folder)) else {
        eprintln!("No puzzle file found in '{folder}'");
        process::exit(1);
    };

    println!("Loading '{}'", input.display());
    let working_set = storage::load(&input)?;
    println!("Loaded {} puzzles", working_set.len());

    let today = Local::now().date_naive();
    let mut session = Session::new(working_set, Schedule::default(), today, output);
    let training_start = Instant::now();

    'session: while let Some((handle, puzzle)) = session.next_puzzle()? {
        println!();
        match &puzzle.description {
            Some(description) => println!("{description}"),
            None => println!("No description"),
        }
        println!("FEN: {}", puzzle.fen);
        if !puzzle.pgn.is_empty() {
            println!("Moves: {}", puzzle.pgn);
        }

        let attempt_start = Instant::now();
        loop {
            match prompt("[c/w/d/h/q]> ").trim() {
                "c" => {
                    let elapsed = attempt_start.elapsed().as_secs_f64();
                    println!("Solved in {elapsed:.1} seconds");
                    session.mark_solved(handle, elapsed)?;
                    break;
                }
                "w" => {
                    println!("Puzzle not solved");
                    session.mark_unsolved(handle)?;
                    break;
                }
                "d" => {
                    session.remove(handle)?;
                    println!("Puzzle removed");
                    break;
                }
                "q" => {
                    session.save()?;
                    break 'session;
                }
                _ => {
                    println!("c - correctly solved");
                    println!("w - wrongly solved");
                    println!("d - delete the current puzzle");
                    println!("q - quit and save");
                }
            }
        }
    }

    if session.is_finished() {
        println!("No more puzzles.");
    }

    log_training_time(Path::new(folder), training_start.elapsed().as_secs_f64())?;
    Ok(())
}

/// Reads one line from stdin after printing `message` as a prompt.
fn prompt(message: &str) -> String {
    print!("{message}");
    io::stdout().flush().expect("Failed to flush stdout");

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read from stdin");
    line
}

/// Session files are numbered `<folder>/<folder>1`, `<folder>/<folder>2`,
/// and so on. The input is the highest existing number; the output is the
/// next one, so every session leaves the previous file untouched.
fn find_session_files(folder: &Path) -> Option<(PathBuf, PathBuf)> {
    let base = folder.file_name()?.to_string_lossy().into_owned();

    let mut current = None;
    let mut counter = 1;
    loop {
        let candidate = folder.join(format!("{base}{counter}"));
        if !candidate.exists() {
            return current.map(|input| (input, candidate));
        }
        current = Some(candidate);
        counter += 1;
    }
}

/// Appends the session's wall-clock duration to `<folder>/trainingTimes`.
fn log_training_time(folder: &Path, seconds: f64) -> Result<()> {
    use std::fs::OpenOptions;

    let path = folder.join("trainingTimes");
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| TrainerError::Save {
            path: path.clone(),
            source,
        })?;

    writeln!(file, "{}: {:.0} seconds", Local::now().date_naive(), seconds).map_err(|source| {
        TrainerError::Save { path, source }
    })
}
