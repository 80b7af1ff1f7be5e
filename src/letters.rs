//! `letters` — The mutable letter inventory the solver spends and refunds.
//!
//! A [`LetterInventory`] is a multiset over `a..=z`, backed by a fixed count
//! array. The solver owns exactly one inventory per solve call: it decrements
//! counts when a word is placed in the square and increments them back when it
//! backtracks, so at any point the inventory equals the puzzle's initial
//! letters minus the letters of the currently placed rows.
//!
//! Everything upstream of this module normalizes to lowercase ASCII, so the
//! 26-slot array covers the whole alphabet the crate supports.

pub(crate) const ALPHABET_SIZE: usize = 26;

/// Slot in the count array for a lowercase ASCII letter.
fn letter_index(c: char) -> usize {
    debug_assert!(
        c.is_ascii_lowercase(),
        "inventory letters must be lowercase ASCII, got '{c}'"
    );
    (c as u8 - b'a') as usize
}

/// A count-per-letter multiset supporting sub-multiset containment checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterInventory {
    counts: [u32; ALPHABET_SIZE],
}

impl LetterInventory {
    /// Builds an inventory counting each letter of `text`.
    ///
    /// `text` must already be lowercase ASCII; callers normalize before
    /// reaching this point.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut inventory = Self::default();
        for c in text.chars() {
            inventory.add(c);
        }
        inventory
    }

    /// Remaining count for `c`.
    #[must_use]
    pub fn count(&self, c: char) -> u32 {
        self.counts[letter_index(c)]
    }

    /// Total number of letters remaining across all slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&n| n as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }

    /// Returns one letter to the inventory (the backtracking refund).
    pub fn add(&mut self, c: char) {
        self.counts[letter_index(c)] += 1;
    }

    /// Spends one letter from the inventory.
    ///
    /// The solver only calls this after a feasibility check, so a zero count
    /// here means its bookkeeping has drifted. That is a defect, never a
    /// user-facing failure, and must not be silently ignored.
    pub fn remove(&mut self, c: char) {
        let i = letter_index(c);
        assert!(
            self.counts[i] > 0,
            "removed letter '{c}' with no remaining count; solver bookkeeping is broken"
        );
        self.counts[i] -= 1;
    }

    /// True iff `other` is a sub-multiset of `self`: every letter's count in
    /// `other` is covered by the count in `self`.
    #[must_use]
    pub fn contains_all(&self, other: &LetterInventory) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(have, need)| have >= need)
    }

    /// True iff `word` can be spelled from the remaining letters.
    ///
    /// This is re-checked at every search depth because the inventory shrinks
    /// as the search descends.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        self.contains_all(&LetterInventory::from_text(word))
    }
}
