//! Error types for puzzle input validation, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E003) for documentation lookup:
//!
//! - E001: `SquareTooSmall` (Square side length below the minimum of two)
//! - E002: `LetterCountMismatch` (Letter string length is not the square of the side length)
//! - E003: `NonAlphabetic` (Letter string contains a non-letter character)
//!
//! These cover everything that can be wrong with a puzzle *input*. "No
//! solution exists" is deliberately not here — it is a normal outcome of the
//! search, reported through [`crate::solver::SolveOutcome`].

/// Custom error type for puzzle input validation
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("square size must be at least two (got {size})")]
    SquareTooSmall { size: usize },

    #[error("expected {expected} letters for a {side}x{side} square, got {actual}")]
    LetterCountMismatch {
        side: usize,
        expected: usize,
        actual: usize,
    },

    #[error("letter string contains invalid character '{invalid_char}' (only ASCII letters allowed)")]
    NonAlphabetic { invalid_char: char },
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::SquareTooSmall { .. } => "E001",
            PuzzleError::LetterCountMismatch { .. } => "E002",
            PuzzleError::NonAlphabetic { .. } => "E003",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::SquareTooSmall { .. } => {
                Some("A word square needs a side length of at least 2 (e.g., size 4 with 16 letters)")
            }
            PuzzleError::LetterCountMismatch { .. } => {
                Some("Supply exactly size*size letters; for size 4 that is a 16-letter string")
            }
            PuzzleError::NonAlphabetic { .. } => {
                Some("Remove digits, punctuation, and accented characters from the letter string")
            }
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

/// Validate the puzzle inputs before the search runs.
///
/// The solver could in principle assume these preconditions (the CLI checks
/// them too), but re-validating at the API boundary turns a malformed call
/// into a reportable error instead of undefined search behavior.
///
/// # Errors
///
/// Returns the first applicable [`PuzzleError`], boxed to keep the size of
/// `Result` payloads stable.
pub fn validate_puzzle(square_size: usize, letters: &str) -> Result<(), Box<PuzzleError>> {
    if square_size < 2 {
        return Err(Box::new(PuzzleError::SquareTooSmall { size: square_size }));
    }

    let expected = square_size * square_size;
    let actual = letters.chars().count();
    if actual != expected {
        return Err(Box::new(PuzzleError::LetterCountMismatch {
            side: square_size,
            expected,
            actual,
        }));
    }

    if let Some(invalid_char) = letters.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(Box::new(PuzzleError::NonAlphabetic { invalid_char }));
    }

    Ok(())
}
