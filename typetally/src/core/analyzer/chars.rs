// src/core/analyzer/chars.rs

/// Counts Unicode scalar values. Never byte length: combining marks and
/// astral-plane symbols each count once.
#[inline]
#[must_use]
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

/// Counts whitespace scalar values (space, tab, newline and any other
/// `White_Space` character), the same classification the paragraph
/// segmentation uses.
#[inline]
#[must_use]
pub fn count_spaces(text: &str) -> usize {
    text.chars().filter(|c| c.is_whitespace()).count()
}
