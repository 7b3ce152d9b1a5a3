// src/utils.rs
use crate::core::view::DensityView;
use crate::models::{TextStats, WordDensityItem};

/// Prints the statistics table. The "Characters" line is the derived
/// non-whitespace figure; the raw scalar count is shown alongside it.
pub fn print_stats(stats: &TextStats) {
    println!("{:<12} {:>8}", "Paragraphs", stats.paragraphs);
    println!("{:<12} {:>8}", "Sentences", stats.sentences);
    println!("{:<12} {:>8}", "Words", stats.words);
    println!("{:<12} {:>8}", "Characters", stats.characters_without_spaces());
    println!("{:<12} {:>8}", "Spaces", stats.spaces);
    println!("{:<12} {:>8}", "Total chars", stats.characters);
}

/// One-line summary for interactive editing.
#[must_use]
pub fn format_summary(stats: &TextStats) -> String {
    format!(
        "paragraphs: {}  sentences: {}  words: {}  characters: {} ({} with spaces)",
        stats.paragraphs,
        stats.sentences,
        stats.words,
        stats.characters_without_spaces(),
        stats.characters
    )
}

fn print_density_header() {
    println!("{:<6} {:<20} {:>7} {:>9}", "RANK", "WORD", "COUNT", "PERCENT");
    println!("{:-<45}", "");
}

fn print_density_rows(rows: &[WordDensityItem], start_rank: usize) {
    for (offset, row) in rows.iter().enumerate() {
        println!(
            "{:<6} {:<20} {:>7} {:>8.2}%",
            start_rank + offset,
            row.token,
            row.count,
            row.percentage
        );
    }
}

/// Prints the top of the density table, ranked from 1. `top` of 0 means
/// every row.
pub fn print_density_top(rows: &[WordDensityItem], top: usize) {
    if rows.is_empty() {
        println!("No words to analyze.");
        return;
    }
    let shown = if top == 0 { rows.len() } else { top.min(rows.len()) };
    println!("Word density ({shown} of {} entries):", rows.len());
    print_density_header();
    print_density_rows(&rows[..shown], 1);
}

/// Prints the window of the density table the view currently exposes,
/// with ranks against the full sorted sequence.
pub fn print_density_window(rows: &[WordDensityItem], view: &DensityView) {
    if rows.is_empty() {
        println!("No words to analyze.");
        return;
    }

    let window = view.window(rows);
    let start = view.start_rank();
    let end = start + window.len().saturating_sub(1);
    println!("Viewing {start}-{end} of {}", rows.len());
    if !view.is_show_all() {
        println!(
            "Page {} / {}",
            view.page(),
            DensityView::total_pages(rows.len())
        );
    }
    print_density_header();
    print_density_rows(window, start);
}

/// Drops a leading YAML frontmatter block.
///
/// When the first line is exactly `---`, everything up to and including
/// the closing `---` line is skipped. Texts without a fence, and texts
/// whose fence never closes, come back unchanged.
#[must_use]
pub fn strip_frontmatter(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("---") else {
        return content;
    };
    // The opening fence must be the whole first line.
    let Some(after_open) = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")) else {
        return content;
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        offset += line.len();
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return &after_open[offset..];
        }
    }
    content
}
