// src/core/analyzer/word.rs
use regex::Regex;
use std::sync::LazyLock;

/// A word is a maximal run of letters, marks or numbers, optionally joined
/// by internal hyphens or apostrophes (ASCII `'` or U+2019), so "don't"
/// and "well-known" are single words.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{M}\p{N}]+(?:[-'’][\p{L}\p{M}\p{N}]+)*").expect("valid regex literal")
});

/// Extracts every word of the text, in order.
///
/// This is the single tokenization rule shared by the word counter and the
/// density table; the two must never diverge.
#[inline]
#[must_use]
pub fn extract_words(text: &str) -> Vec<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Counts words without materializing them.
#[inline]
#[must_use]
pub fn count_words(text: &str) -> usize {
    WORD_RE.find_iter(text).count()
}
