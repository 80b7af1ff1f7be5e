use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use wordsquare::solver::{self, SolveOutcome};
use wordsquare::word_list::WordList;

/// Symmetric word-square solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Side length of the square (N)
    square_size: usize,

    /// The N*N letters to spend, as one string (case-insensitive)
    letters: String,

    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,
}

/// Entry point of the word-square CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("WORDSQUARE_DEBUG").is_ok();
    wordsquare::log::init_logger(debug_enabled);

    log::debug!("starting word-square solver");

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a SolverError
        if let Some(solver_err) = e.downcast_ref::<solver::SolverError>() {
            eprintln!("Error: {}", solver_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the word-square CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the word list from disk.
/// 3. Solve the puzzle against the word list.
/// 4. Print the solution grid (or "Not solvable") on stdout.
/// 5. Print performance metrics (timings, counts) on stderr.
///
/// Returns `Ok(())` on success or an error (e.g., malformed puzzle input,
/// missing word-list file) which bubbles up to [`main`]. "Not solvable" is a
/// normal outcome, not an error.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Load the word list from disk
    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    // Build a Vec<&str> of word references for the solver
    let words_ref: Vec<_> = word_list.words.iter().map(String::as_str).collect();

    // 2. Solve the puzzle against the word list
    let t_solve = Instant::now();
    let outcome = solver::solve_square(cli.square_size, &cli.letters, &words_ref)?;
    let solve_secs = t_solve.elapsed().as_secs_f64();

    // 3. Print the result on stdout
    match outcome {
        SolveOutcome::Solved(square) => println!("{square}"),
        SolveOutcome::NoSolution => println!("Not solvable"),
    }

    // 4. Print diagnostics (word-list size, timings) to stderr
    eprintln!(
        "Loaded {} words in {:.3}s; solved in {:.3}s.",
        word_list.words.len(),
        load_secs,
        solve_secs
    );

    Ok(())
}
