// src/models/text_stats.rs
use serde::Serialize;

use crate::models::WordDensityItem;

/// Descriptive statistics for one text, recomputed fresh on every change.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TextStats {
    pub paragraphs: usize,
    pub sentences: usize,
    pub words: usize,
    /// Unicode scalar values, whitespace included.
    pub characters: usize,
    /// Whitespace scalar values (space, tab, newline and friends).
    pub spaces: usize,
    pub word_density: Vec<WordDensityItem>,
}

impl TextStats {
    /// The "Characters" figure shown to users: non-whitespace scalar
    /// values. Derived from the two raw counts, which stay exposed.
    #[must_use]
    pub const fn characters_without_spaces(&self) -> usize {
        self.characters.saturating_sub(self.spaces)
    }
}
