// src/models/density_item.rs
use serde::Serialize;

/// One row of the word-density table: a case-folded token, how often it
/// occurs, and its share of the total word count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordDensityItem {
    pub token: String,
    pub count: usize,
    pub percentage: f64,
}
