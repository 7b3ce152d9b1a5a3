// src/core/analyzer/segment.rs
use regex::Regex;
use std::sync::LazyLock;

/// A paragraph break is a run of one or more blank lines; a line holding
/// only whitespace counts as blank.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex literal"));

/// Counts paragraphs: blocks of text separated by blank-line runs.
///
/// Line breaks are normalized first (`\r\n` becomes `\n`), each block is
/// trimmed, and empty blocks are discarded. A text with content but no
/// blank-line separator is a single paragraph; a text that trims to
/// nothing has none.
#[inline]
#[must_use]
pub fn count_paragraphs(text: &str) -> usize {
    let normalized = text.replace("\r\n", "\n");
    let blocks = PARAGRAPH_BREAK
        .split(&normalized)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .count();
    if blocks > 0 {
        blocks
    } else {
        usize::from(!normalized.trim().is_empty())
    }
}

/// Counts sentences: pieces separated by runs of `.`, `!` or `?`.
///
/// This is a deliberate approximation. Abbreviations, decimal numbers and
/// ellipses are not special-cased, so "Dr. Smith" counts as two sentences
/// and "3.14" as two pieces.
#[inline]
#[must_use]
pub fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .count()
}
