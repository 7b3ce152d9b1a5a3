// src/core/analyzer.rs
pub mod chars;
pub mod density;
pub mod segment;
pub mod word;

pub use chars::{count_characters, count_spaces};
pub use density::{DensityOptions, compute_word_density};
pub use segment::{count_paragraphs, count_sentences};
pub use word::{count_words, extract_words};

use crate::models::TextStats;

/// Computes the full statistics value for a text.
///
/// Every counter is an independent pass over the input; the density table
/// is built with default options. Total over all inputs: the empty string
/// simply yields zeros and an empty table.
#[must_use]
pub fn compute_text_stats(text: &str) -> TextStats {
    TextStats {
        paragraphs: count_paragraphs(text),
        sentences: count_sentences(text),
        words: count_words(text),
        characters: count_characters(text),
        spaces: count_spaces(text),
        word_density: compute_word_density(text, &DensityOptions::default()),
    }
}
