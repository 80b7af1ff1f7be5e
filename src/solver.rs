//! The backtracking solver that arranges candidate words into a symmetric
//! word square.
//!
//! A symmetric word square of size N is an N×N letter grid where the string
//! read down column i equals the string read across row i, for every i. The
//! solver must additionally spend the puzzle's letter multiset *exactly*: the
//! letters of the N placed words, taken together, must equal the supplied
//! letters.
//!
//! The search is depth-first over rows. Placing rows 0..d pins down the first
//! d letters of row d (they are column d of the rows already placed), so each
//! step is a single prefix-bucket lookup followed by an inventory feasibility
//! re-check. When the full depth is reached the symmetry property already
//! holds by construction — no separate validation pass is needed.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with one variant:
//!
//! - S001: `InvalidPuzzle` (Puzzle input validation failed (wraps [`PuzzleError`]))
//!
//! "No solution" is *not* an error; it is the [`SolveOutcome::NoSolution`]
//! value of a successful run.
//!
//! # Examples
//!
//! ```
//! use wordsquare::solver::{self, SolveOutcome};
//!
//! let words = vec!["rose", "oven", "send", "ends"];
//! let outcome = solver::solve_square(4, "eeeeddoonnnsssrv", &words)?;
//!
//! match outcome {
//!     SolveOutcome::Solved(square) => println!("{square}"),
//!     SolveOutcome::NoSolution => println!("Not solvable"),
//! }
//! # Ok::<(), wordsquare::solver::SolverError>(())
//! ```

use std::fmt;

use log::debug;

use crate::errors::{validate_puzzle, PuzzleError};
use crate::letters::LetterInventory;
use crate::prefix_index::PrefixIndex;
use crate::word_list::filter_candidates;

/// A completed symmetric word square, one word per row.
///
/// Row order is the order the solver placed the words; by the symmetry
/// property row i is also column i.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSquare {
    rows: Vec<String>,
}

impl WordSquare {
    /// The rows of the square, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Side length of the square.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Consumes the square, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }
}

impl fmt::Display for WordSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Outcome of a solver run that did not hit an input error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A square was found. With a fixed word list and letter string the same
    /// square is returned on every run (first success in input order).
    Solved(WordSquare),

    /// The search space was exhausted without finding a square. A legitimate
    /// terminal result, not a failure mode.
    NoSolution,
}

/// Unified error type for the solver pipeline.
///
/// Callers only need to handle a single `Result<_, SolverError>`; today the
/// only thing that can go wrong is malformed puzzle input, since the search
/// itself is pure computation with no fallible steps.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// Puzzle input validation failed.
    ///
    /// These originate from [`validate_puzzle`], boxed to keep the error type
    /// size stable.
    #[error("invalid puzzle: {0}")]
    InvalidPuzzle(#[from] Box<PuzzleError>),
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::InvalidPuzzle(_) => "S001",
        }
    }

    /// Formats the error with code and underlying detail
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::InvalidPuzzle(pe) => {
                // delegate to PuzzleError's detailed display
                format!("{}\n  caused by: {}", self.code(), pe.display_detailed())
            }
        }
    }
}

/// Solve the word-square puzzle: arrange `square_size` words from `word_list`
/// into a symmetric square that spends `letters` exactly.
///
/// Pipeline:
/// 1. Validate the inputs (size ≥ 2, `letters` is size² ASCII letters).
/// 2. Build the letter inventory from the lowercased letters.
/// 3. Filter the word list to candidates: right length, spellable from the
///    full inventory, lowercase-normalized, input order preserved.
/// 4. Index every prefix of every candidate.
/// 5. Run the backtracking search.
///
/// The result is deterministic for a fixed input: the first successful branch
/// in candidate order wins, and candidate order is input order. No claim is
/// made that the returned square is the "best" among ties.
///
/// # Errors
///
/// Returns [`SolverError::InvalidPuzzle`] if the inputs fail validation.
/// A solvable-but-unsolved puzzle is `Ok(SolveOutcome::NoSolution)`.
pub fn solve_square(
    square_size: usize,
    letters: &str,
    word_list: &[&str],
) -> Result<SolveOutcome, SolverError> {
    validate_puzzle(square_size, letters)?;

    let letters = letters.to_lowercase();
    let mut inventory = LetterInventory::from_text(&letters);

    let candidates = filter_candidates(word_list, square_size, &inventory);
    debug!(
        "{} of {} words survive the length/letter filter",
        candidates.len(),
        word_list.len()
    );

    let index = PrefixIndex::build(&candidates);
    debug!("prefix index holds {} distinct prefixes", index.len());

    let mut rows: Vec<&str> = Vec::with_capacity(square_size);
    let solved = fill_rows(&mut rows, square_size, &index, &mut inventory);

    if solved {
        debug_assert_eq!(rows.len(), square_size);
        debug_assert!(
            is_symmetric(&rows),
            "completed square must be symmetric by construction: {rows:?}"
        );
        debug_assert!(
            inventory.is_empty(),
            "a completed square must spend every letter; leftover: {inventory:?}"
        );
        Ok(SolveOutcome::Solved(WordSquare {
            rows: rows.into_iter().map(str::to_string).collect(),
        }))
    } else {
        debug_assert_eq!(
            inventory,
            LetterInventory::from_text(&letters),
            "a failed search must leave the inventory untouched"
        );
        Ok(SolveOutcome::NoSolution)
    }
}

/// Recursive backtracking step: try to extend `rows` to `square_size` rows.
///
/// At depth d (= `rows.len()`), the next word's first d letters are forced:
/// letter r of the required prefix is `rows[r][d]`, column d of an
/// already-placed row. Candidates come from the prefix bucket for that forced
/// string, re-filtered against the *current* inventory (which shrinks as the
/// search descends, so the check cannot be cached across visits).
///
/// Returns `true` as soon as one branch completes; `rows` then holds the full
/// square and the inventory is empty. On `false`, `rows` and the inventory
/// are restored exactly to their state on entry — the core contract of the
/// backtracking search.
fn fill_rows<'a>(
    rows: &mut Vec<&'a str>,
    square_size: usize,
    index: &PrefixIndex<'a>,
    inventory: &mut LetterInventory,
) -> bool {
    let depth = rows.len();
    if depth == square_size {
        return true;
    }

    // Column `depth` of the placed rows, read top to bottom.
    let required_prefix: String = rows
        .iter()
        .map(|row| row.as_bytes()[depth] as char)
        .collect();

    // An absent bucket means no candidate anywhere has this prefix: the
    // branch is dead before any inventory mutation.
    let Some(bucket) = index.get(&required_prefix) else {
        debug!("dead branch at depth {depth}: no word starts with {required_prefix:?}");
        return false;
    };

    #[cfg(debug_assertions)]
    let entry_inventory = inventory.clone();

    for &word in bucket {
        if !inventory.can_spell(word) {
            continue;
        }

        rows.push(word);
        for c in word.chars() {
            inventory.remove(c);
        }

        if fill_rows(rows, square_size, index, inventory) {
            // Propagate the first success without undoing the placement.
            return true;
        }

        rows.pop();
        for c in word.chars() {
            inventory.add(c);
        }
    }

    #[cfg(debug_assertions)]
    debug_assert_eq!(
        *inventory, entry_inventory,
        "failed branch at depth {depth} must restore the inventory"
    );
    false
}

/// True iff `rows[i][j] == rows[j][i]` for all i, j.
///
/// The search guarantees this for anything it returns; the check only backs
/// the `debug_assert` above and the tests.
fn is_symmetric(rows: &[&str]) -> bool {
    rows.iter().enumerate().all(|(i, row)| {
        row.len() == rows.len()
            && (0..rows.len()).all(|j| row.as_bytes()[j] == rows[j].as_bytes()[i])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_solved(outcome: SolveOutcome) -> WordSquare {
        match outcome {
            SolveOutcome::Solved(square) => square,
            SolveOutcome::NoSolution => panic!("expected a solution, got NoSolution"),
        }
    }

    #[test]
    fn test_solve_four_by_four() {
        let words = vec!["rose", "oven", "send", "ends"];
        let outcome = solve_square(4, "eeeeddoonnnsssrv", &words).unwrap();

        let square = assert_solved(outcome);
        assert_eq!(square.rows(), ["rose", "oven", "send", "ends"]);
    }

    #[test]
    fn test_solve_three_by_three() {
        let words = vec!["cat", "ate", "tea"];
        let outcome = solve_square(3, "catatetea", &words).unwrap();

        let square = assert_solved(outcome);
        assert_eq!(square.rows(), ["cat", "ate", "tea"]);
    }

    #[test]
    fn test_solve_two_by_two() {
        let words = vec!["no", "on"];
        let outcome = solve_square(2, "noon", &words).unwrap();

        let square = assert_solved(outcome);
        assert_eq!(square.size(), 2);
        let rows: Vec<&str> = square.rows().iter().map(String::as_str).collect();
        assert!(is_symmetric(&rows));
    }

    #[test]
    fn test_no_common_prefix_overlap_fails() {
        // "ab" forces row 1 to start with 'b'; only "cd" remains
        let words = vec!["ab", "cd"];
        let outcome = solve_square(2, "abcd", &words).unwrap();
        assert_eq!(outcome, SolveOutcome::NoSolution);
    }

    #[test]
    fn test_inventory_pruning_forces_backtrack() {
        // "aa" fits the empty prefix but leaves no 'a' for row 1, so the
        // solver must back out of it and continue with "ab"/"ba".
        let words = vec!["aa", "ab", "ba"];
        let outcome = solve_square(2, "aabb", &words).unwrap();

        let square = assert_solved(outcome);
        assert_eq!(square.rows(), ["ab", "ba"]);
    }

    #[test]
    fn test_result_is_deterministic() {
        let words = vec!["sore", "rose", "oven", "send", "ends", "eons"];
        let first = solve_square(4, "eeeeddoonnnsssrv", &words).unwrap();
        let second = solve_square(4, "eeeeddoonnnsssrv", &words).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_letters_are_conserved_on_success() {
        let letters = "eeeeddoonnnsssrv";
        let words = vec!["rose", "oven", "send", "ends"];
        let square = assert_solved(solve_square(4, letters, &words).unwrap());

        let spent: String = square.rows().concat();
        assert_eq!(
            LetterInventory::from_text(&spent),
            LetterInventory::from_text(letters)
        );
    }

    #[test]
    fn test_display_renders_grid() {
        let words = vec!["rose", "oven", "send", "ends"];
        let square = assert_solved(solve_square(4, "eeeeddoonnnsssrv", &words).unwrap());
        assert_eq!(square.to_string(), "rose\noven\nsend\nends");
    }

    #[test]
    fn test_invalid_size_is_an_error() {
        let err = solve_square(1, "a", &["a"]).unwrap_err();
        assert!(matches!(
            &err,
            SolverError::InvalidPuzzle(pe) if matches!(**pe, PuzzleError::SquareTooSmall { size: 1 })
        ));
        assert_eq!(err.code(), "S001");
        assert!(err.display_detailed().contains("E001"));
    }

    #[test]
    fn test_wrong_letter_count_is_an_error() {
        let err = solve_square(2, "abcde", &["ab"]).unwrap_err();
        assert!(matches!(
            &err,
            SolverError::InvalidPuzzle(pe)
                if matches!(**pe, PuzzleError::LetterCountMismatch { expected: 4, actual: 5, .. })
        ));
    }

    #[test]
    fn test_non_letter_input_is_an_error() {
        let err = solve_square(2, "ab3d", &["ab"]).unwrap_err();
        assert!(matches!(
            &err,
            SolverError::InvalidPuzzle(pe)
                if matches!(**pe, PuzzleError::NonAlphabetic { invalid_char: '3' })
        ));
    }

    #[test]
    fn test_is_symmetric() {
        assert!(is_symmetric(&["rose", "oven", "send", "ends"]));
        assert!(is_symmetric(&["no", "on"]));
        assert!(!is_symmetric(&["ab", "cd"]));
        // right words, wrong order
        assert!(!is_symmetric(&["oven", "rose", "send", "ends"]));
    }

    mod edge_cases {
        use super::*;

        #[test]
        fn test_empty_word_list() {
            let outcome = solve_square(2, "noon", &[]).unwrap();
            assert_eq!(outcome, SolveOutcome::NoSolution);
        }

        #[test]
        fn test_no_word_of_matching_length() {
            let words = vec!["non", "ono"];
            let outcome = solve_square(2, "noon", &words).unwrap();
            assert_eq!(outcome, SolveOutcome::NoSolution);
        }

        #[test]
        fn test_mixed_case_letters_and_words() {
            let words = vec!["No", "ON"];
            let outcome = solve_square(2, "NoOn", &words).unwrap();
            assert!(matches!(outcome, SolveOutcome::Solved(_)));
        }

        #[test]
        fn test_duplicate_words_in_list() {
            let words = vec!["no", "no", "on", "on"];
            let outcome = solve_square(2, "noon", &words).unwrap();
            assert!(matches!(outcome, SolveOutcome::Solved(_)));
        }

        #[test]
        fn test_unrelated_words_do_not_interfere() {
            let words = vec!["zzzz", "rose", "xxxx", "oven", "send", "ends", "cat"];
            let square = assert_solved(solve_square(4, "eeeeddoonnnsssrv", &words).unwrap());
            assert_eq!(square.rows(), ["rose", "oven", "send", "ends"]);
        }

        #[test]
        fn test_right_words_wrong_letters() {
            // the words form a square, but the letter budget doesn't cover them
            let words = vec!["rose", "oven", "send", "ends"];
            let outcome = solve_square(4, "aaaaaaaaaaaaaaaa", &words).unwrap();
            assert_eq!(outcome, SolveOutcome::NoSolution);
        }

        #[test]
        fn test_fewer_candidates_than_rows() {
            let words = vec!["rose"];
            let outcome = solve_square(4, "eeeeddoonnnsssrv", &words).unwrap();
            assert_eq!(outcome, SolveOutcome::NoSolution);
        }

        #[test]
        fn test_word_may_be_reused_if_letters_allow() {
            // nothing requires distinct rows; "aa" twice is a valid square
            let words = vec!["aa"];
            let square = assert_solved(solve_square(2, "aaaa", &words).unwrap());
            assert_eq!(square.rows(), ["aa", "aa"]);
        }
    }

    mod invariants {
        use super::*;

        #[test]
        fn test_failed_search_restores_state() {
            let letters = "abcd";
            let mut inventory = LetterInventory::from_text(letters);
            let candidates = filter_candidates(&["ab", "cd"], 2, &inventory);
            let index = PrefixIndex::build(&candidates);
            let mut rows: Vec<&str> = Vec::new();

            let solved = fill_rows(&mut rows, 2, &index, &mut inventory);

            assert!(!solved);
            assert!(rows.is_empty(), "partial square must be fully popped");
            assert_eq!(
                inventory,
                LetterInventory::from_text(letters),
                "inventory must be byte-for-byte as before the call"
            );
        }

        #[test]
        fn test_partial_depth_failure_restores_state() {
            // Both words place fine at depth 0, but the depth-1 bucket is
            // present yet infeasible ("bb" needs two b's and only one is
            // left), so the failure must unwind cleanly through depth 0.
            let letters = "aabb";
            let mut inventory = LetterInventory::from_text(letters);
            let candidates = filter_candidates(&["ab", "bb"], 2, &inventory);
            let index = PrefixIndex::build(&candidates);
            let mut rows: Vec<&str> = Vec::new();

            let solved = fill_rows(&mut rows, 2, &index, &mut inventory);

            assert!(!solved);
            assert!(rows.is_empty());
            assert_eq!(inventory, LetterInventory::from_text(letters));
        }

        #[test]
        fn test_success_leaves_square_and_empty_inventory() {
            let mut inventory = LetterInventory::from_text("noon");
            let candidates = filter_candidates(&["no", "on"], 2, &inventory);
            let index = PrefixIndex::build(&candidates);
            let mut rows: Vec<&str> = Vec::new();

            let solved = fill_rows(&mut rows, 2, &index, &mut inventory);

            assert!(solved);
            assert_eq!(rows, ["no", "on"]);
            assert!(inventory.is_empty());
        }

        #[test]
        fn test_symmetry_holds_for_every_solution() {
            // a word list with several interlocking squares; whichever branch
            // wins, the result must be symmetric
            let words = vec!["sore", "ores", "rose", "eons", "oven", "send", "ends"];
            if let SolveOutcome::Solved(square) =
                solve_square(4, "eeeeddoonnnsssrv", &words).unwrap()
            {
                let rows: Vec<&str> = square.rows().iter().map(String::as_str).collect();
                assert!(is_symmetric(&rows), "square {rows:?} is not symmetric");
            }
        }
    }
}
