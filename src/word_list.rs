//! `word_list` — Module to load and preprocess the dictionary for the solver.
//!
//! The input format is one word per line. Parsing is deliberately forgiving:
//! blank lines and lines containing anything other than ASCII letters are
//! skipped silently, and every surviving word is normalized to lowercase.
//!
//! Unlike a scored crossword list there is nothing to rank here, so the list
//! is deduplicated but **not** sorted: the solver's tie-break is "first
//! occurrence order among the input words", which makes the original line
//! order load-bearing. Deduplication keeps the first occurrence.
//!
//! The public API mirrors the usual split:
//! - `parse_from_str(...)` — parse in-memory contents.
//! - `load_from_path(...)` — convenience wrapper that reads from a file path.

use std::collections::HashSet;

use crate::letters::LetterInventory;

/// A processed, ready-to-use word list.
#[derive(Debug, Clone)]
pub struct WordList {
    /// Lowercase ASCII words in first-seen order.
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string, one word per line.
    ///
    /// Behavior:
    /// 1. Trims whitespace around each line.
    /// 2. Skips empty lines and lines with non-alphabetic characters.
    /// 3. Normalizes to lowercase.
    /// 4. Deduplicates, keeping the first occurrence (order is preserved
    ///    because it fixes the solver's deterministic tie-break).
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut seen: HashSet<String> = HashSet::new();
        let words = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() || !line.chars().all(|c| c.is_ascii_alphabetic()) {
                    return None;
                }
                let word = line.to_lowercase();
                // insert() returns false for a repeat, dropping the duplicate
                seen.insert(word.clone()).then_some(word)
            })
            .collect();

        WordList { words }
    }

    /// Read a word list from a file path and parse it.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }
}

/// Reduce a raw word list to the puzzle's candidate set: words of length
/// `size` whose letters are fully covered by `inventory`.
///
/// Words are lowercase-normalized before the check; anything that is not pure
/// ASCII letters after normalization is dropped (the inventory only models
/// `a..=z`). Surviving words keep their input order — that order is the
/// solver's tie-break.
#[must_use]
pub fn filter_candidates(
    words: &[&str],
    size: usize,
    inventory: &LetterInventory,
) -> Vec<String> {
    words
        .iter()
        .filter_map(|raw| {
            let word = raw.to_lowercase();
            let fits = word.len() == size
                && word.bytes().all(|b| b.is_ascii_lowercase())
                && inventory.can_spell(&word);
            fits.then_some(word)
        })
        .collect()
}
