// tests/integration_tests/stats_test.rs
use super::common::SAMPLE_DOCUMENT;
use typetally::{compute_text_stats, count_words, extract_words};

#[test]
fn test_sample_document_counts() {
    let stats = compute_text_stats(SAMPLE_DOCUMENT);

    assert_eq!(stats.paragraphs, 3, "Blank lines separate three paragraphs");
    assert_eq!(stats.sentences, 5, "Five terminator-delimited sentences");
    assert_eq!(stats.words, 22, "Joined words count once each");
    assert_eq!(
        stats.characters,
        SAMPLE_DOCUMENT.chars().count(),
        "Characters are scalar values"
    );
    assert_eq!(
        stats.spaces,
        SAMPLE_DOCUMENT.chars().filter(|c| c.is_whitespace()).count()
    );
    assert_eq!(
        stats.characters_without_spaces(),
        stats.characters - stats.spaces
    );
}

#[test]
fn test_word_count_equals_extraction_length() {
    assert_eq!(
        count_words(SAMPLE_DOCUMENT),
        extract_words(SAMPLE_DOCUMENT).len()
    );
}

#[test]
fn test_density_is_included_and_covers_all_words() {
    let stats = compute_text_stats(SAMPLE_DOCUMENT);
    let summed: usize = stats.word_density.iter().map(|r| r.count).sum();
    assert_eq!(summed, stats.words, "Default options filter nothing");

    let the = stats
        .word_density
        .iter()
        .find(|r| r.token == "the")
        .expect("'the' appears in the sample");
    assert_eq!(the.count, 3, "Case-folded 'The' and 'the' aggregate");
}

#[test]
fn test_unicode_document() {
    let stats = compute_text_stats("Füße im Schnee. 雪の中の足!\n\nC'est l'hiver déjà?");
    assert_eq!(stats.paragraphs, 2);
    assert_eq!(stats.sentences, 3);
    assert!(stats.words >= 7, "Unicode words tokenize");
    assert_eq!(stats.characters, stats.spaces + stats.characters_without_spaces());
}

#[test]
fn test_recomputation_is_stable() {
    assert_eq!(
        compute_text_stats(SAMPLE_DOCUMENT),
        compute_text_stats(SAMPLE_DOCUMENT)
    );
}
