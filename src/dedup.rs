//! Duplicate detection for normalized words
//!
//! A run keeps every word it has emitted in an ahash-backed set. The set only
//! grows and is dropped with the run.

use ahash::RandomState;
use hashbrown::HashSet;

/// Words already emitted during the current run
#[derive(Debug, Default)]
pub struct SeenWords {
    set: HashSet<String, RandomState>,
}

impl SeenWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word. Returns `false` if it was already present
    pub fn insert(&mut self, word: &str) -> bool {
        if self.set.contains(word) {
            return false;
        }
        self.set.insert(word.to_owned())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }
}
