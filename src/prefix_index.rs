//! `prefix_index` — Buckets of candidate words keyed by explicit prefix.
//!
//! Functionally this is a trie flattened into a hash map: every prefix of
//! every candidate word (including the empty prefix and the word itself) maps
//! to the list of words sharing that prefix, in first-seen order. The index is
//! built once after candidate filtering and is read-only during search.
//!
//! The lookup deliberately returns `Option<&[..]>` rather than defaulting to
//! an empty slice: `None` means "no word in the whole candidate set has this
//! prefix", which lets the solver kill a branch without touching the
//! inventory. A present bucket whose words all fail the inventory re-filter is
//! a different situation and is handled by the caller.

use std::collections::HashMap;

/// Index from prefix to the candidate words sharing it.
///
/// Borrows the candidate list; keys are sub-slices of the words themselves,
/// so building the index allocates nothing but the map and its buckets.
#[derive(Debug, Default)]
pub struct PrefixIndex<'a> {
    buckets: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> PrefixIndex<'a> {
    /// Build the index: each word is appended to the bucket of every one of
    /// its prefixes, from length 0 up to the full word.
    ///
    /// Words must be ASCII (guaranteed by candidate filtering), so byte
    /// slicing along `0..=len` always lands on character boundaries.
    #[must_use]
    pub fn build(words: &'a [String]) -> Self {
        let mut buckets: HashMap<&'a str, Vec<&'a str>> = HashMap::new();

        for word in words {
            debug_assert!(word.is_ascii(), "candidate words must be ASCII: {word:?}");
            for prefix_len in 0..=word.len() {
                buckets
                    .entry(&word[..prefix_len])
                    .or_default()
                    .push(word.as_str());
            }
        }

        PrefixIndex { buckets }
    }

    /// Words sharing `prefix`, in first-seen order, or `None` if no candidate
    /// word has this prefix at all.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&[&'a str]> {
        self.buckets.get(prefix).map(Vec::as_slice)
    }

    /// Number of distinct prefixes in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
