// src/core/analyzer/density.rs
use std::collections::HashMap;

use crate::core::analyzer::word::extract_words;
use crate::models::WordDensityItem;

/// Knobs for the density table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityOptions {
    /// Tokens whose case-folded length (in scalar values) is below this
    /// are dropped. 0 and 1 both mean "keep everything".
    pub min_length: usize,
}

impl Default for DensityOptions {
    fn default() -> Self {
        Self { min_length: 1 }
    }
}

/// Builds the case-folded word-frequency table.
///
/// Words come from the same tokenization rule as the word counter, so the
/// percentage denominator is always the raw word count, not the filtered
/// subset. Rows are sorted by count descending, ties broken by token
/// ascending; identical input always produces identical output.
///
/// # Arguments
///
/// * `text` - The text to analyze
/// * `options` - Minimum token length to keep
///
/// # Returns
///
/// The ordered density rows; empty when the text has no words or every
/// token was filtered out.
#[must_use]
pub fn compute_word_density(text: &str, options: &DensityOptions) -> Vec<WordDensityItem> {
    let words = extract_words(text);
    let total_words = words.len();
    if total_words == 0 {
        return Vec::new();
    }

    let mut freq: HashMap<String, usize> = HashMap::new();
    for raw in words {
        let token = raw.to_lowercase();
        if token.chars().count() < options.min_length {
            continue;
        }
        *freq.entry(token).or_insert(0) += 1;
    }

    let mut items: Vec<WordDensityItem> = freq
        .into_iter()
        .map(|(token, count)| WordDensityItem {
            token,
            count,
            percentage: (count as f64 / total_words as f64) * 100.0,
        })
        .collect();

    items.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token)));

    items
}
