// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod repl;
pub mod utils;

pub use cli::{Args, run};
pub use config::{Config, DEFAULT_MIN_LENGTH, DEFAULT_TOP};
pub use core::analyzer::{
    DensityOptions, compute_text_stats, compute_word_density, count_characters, count_paragraphs,
    count_sentences, count_spaces, count_words, extract_words,
};
pub use core::view::{DensityView, PAGE_SIZE};
pub use models::{TextStats, WordDensityItem};
