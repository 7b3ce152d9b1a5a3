// tests/integration_tests/edge_cases_test.rs
use typetally::{DensityOptions, compute_text_stats, compute_word_density};

#[test]
fn test_empty_string() {
    let stats = compute_text_stats("");
    assert_eq!(stats.paragraphs, 0);
    assert_eq!(stats.sentences, 0);
    assert_eq!(stats.words, 0);
    assert_eq!(stats.characters, 0);
    assert_eq!(stats.spaces, 0);
    assert!(stats.word_density.is_empty());
}

#[test]
fn test_whitespace_only_string() {
    let text = "   \n\n  ";
    let stats = compute_text_stats(text);
    assert_eq!(stats.paragraphs, 0);
    assert_eq!(stats.words, 0);
    assert!(stats.word_density.is_empty());
    assert_eq!(stats.spaces, text.chars().count());
    assert_eq!(stats.characters, text.chars().count());
}

#[test]
fn test_punctuation_only_string() {
    let stats = compute_text_stats("?!...");
    assert_eq!(stats.words, 0);
    assert_eq!(stats.sentences, 0, "Terminators with no content are no sentences");
    assert_eq!(stats.paragraphs, 1, "Non-whitespace content forms one block");
    assert!(stats.word_density.is_empty());
}

#[test]
fn test_astral_and_combining_characters() {
    // Violin clef is one scalar value; the accent is its own.
    let text = "𝄞 cafe\u{0301}";
    let stats = compute_text_stats(text);
    assert_eq!(stats.characters, 7);
    assert_eq!(stats.spaces, 1);
    assert_eq!(stats.words, 1, "The clef is a symbol, not a word");
}

#[test]
fn test_crlf_document() {
    let stats = compute_text_stats("First.\r\n\r\nSecond.\r\n");
    assert_eq!(stats.paragraphs, 2);
    assert_eq!(stats.sentences, 2);
}

#[test]
fn test_single_word_repeated_heavily() {
    let text = "word ".repeat(1000);
    let stats = compute_text_stats(&text);
    assert_eq!(stats.words, 1000);
    assert_eq!(stats.word_density.len(), 1);
    assert!((stats.word_density[0].percentage - 100.0).abs() < 1e-9);
}

#[test]
fn test_large_min_length_is_harmless() {
    let rows = compute_word_density("short words only", &DensityOptions { min_length: 100 });
    assert!(rows.is_empty());
}
