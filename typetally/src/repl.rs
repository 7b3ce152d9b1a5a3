// src/repl.rs
use anyhow::Result;
use std::io::{self, BufRead as _};

use crate::core::analyzer::{
    DensityOptions, compute_word_density, count_characters, count_paragraphs, count_sentences,
    count_spaces, count_words,
};
use crate::core::view::DensityView;
use crate::models::{TextStats, WordDensityItem};
use crate::utils::{format_summary, print_density_window, print_stats};

/// One parsed input line: either a colon-command or plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Stats,
    Density,
    Next,
    Prev,
    All,
    Paged,
    Clear,
    Help,
    Quit,
    Unknown(String),
    Text(String),
}

impl Command {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if !trimmed.starts_with(':') {
            return Self::Text(line.to_owned());
        }
        match trimmed {
            ":stats" => Self::Stats,
            ":density" => Self::Density,
            ":next" => Self::Next,
            ":prev" => Self::Prev,
            ":all" => Self::All,
            ":paged" => Self::Paged,
            ":clear" => Self::Clear,
            ":help" => Self::Help,
            ":quit" | ":q" => Self::Quit,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

/// Interactive state: the text buffer plus the density view.
///
/// Every buffer mutation counts as a text change and resets the view, so
/// the density table is never computed while the user is typing.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    text: String,
    view: DensityView,
    options: DensityOptions,
}

impl Session {
    #[must_use]
    pub fn new(min_length: usize) -> Self {
        Self {
            text: String::new(),
            view: DensityView::new(),
            options: DensityOptions { min_length },
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn view(&self) -> DensityView {
        self.view
    }

    /// Appends one input line (with its newline) to the buffer.
    pub fn push_line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
        self.view.text_changed();
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.view.text_changed();
    }

    /// The cheap per-edit statistics: scalar counters only, no density
    /// table.
    #[must_use]
    pub fn scalar_stats(&self) -> TextStats {
        TextStats {
            paragraphs: count_paragraphs(&self.text),
            sentences: count_sentences(&self.text),
            words: count_words(&self.text),
            characters: count_characters(&self.text),
            spaces: count_spaces(&self.text),
            word_density: Vec::new(),
        }
    }

    /// The density table for the current buffer. Callers only invoke this
    /// while the view is open.
    #[must_use]
    pub fn density(&self) -> Vec<WordDensityItem> {
        compute_word_density(&self.text, &self.options)
    }

    pub fn toggle_view(&mut self) {
        self.view.toggle();
    }

    pub fn next_page(&mut self) {
        let rows = self.density().len();
        self.view.next_page(rows);
    }

    pub fn prev_page(&mut self) {
        self.view.prev_page();
    }

    pub fn show_all(&mut self) {
        self.view.show_all();
    }

    pub fn paginate(&mut self) {
        self.view.paginate();
    }
}

fn print_help() {
    println!("Lines without a leading ':' are appended to the text buffer.");
    println!(":stats    full statistics table");
    println!(":density  open or close the word density view");
    println!(":next     next density page");
    println!(":prev     previous density page");
    println!(":all      show the whole density table");
    println!(":paged    back to paginated display");
    println!(":clear    empty the text buffer");
    println!(":help     this overview");
    println!(":quit     leave the session");
}

fn print_view(session: &Session) {
    let rows = session.density();
    print_density_window(&rows, &session.view());
}

/// Runs the line-based interactive session until `:quit` or end of input.
///
/// # Errors
///
/// Returns an error when reading standard input fails.
pub fn run_session(min_length: usize) -> Result<()> {
    println!("typetally interactive session. :help lists commands, :quit leaves.");
    let mut session = Session::new(min_length);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Command::Text(text) => {
                let was_open = session.view().is_open();
                session.push_line(&text);
                if was_open {
                    println!("(density view closed)");
                }
                println!("{}", format_summary(&session.scalar_stats()));
            }
            Command::Stats => print_stats(&session.scalar_stats()),
            Command::Density => {
                session.toggle_view();
                if session.view().is_open() {
                    print_view(&session);
                } else {
                    println!("Density view closed.");
                }
            }
            Command::Next => {
                if session.view().is_open() {
                    session.next_page();
                    print_view(&session);
                } else {
                    println!("Density view is closed (use :density).");
                }
            }
            Command::Prev => {
                if session.view().is_open() {
                    session.prev_page();
                    print_view(&session);
                } else {
                    println!("Density view is closed (use :density).");
                }
            }
            Command::All => {
                if session.view().is_open() {
                    session.show_all();
                    print_view(&session);
                } else {
                    println!("Density view is closed (use :density).");
                }
            }
            Command::Paged => {
                if session.view().is_open() {
                    session.paginate();
                    print_view(&session);
                } else {
                    println!("Density view is closed (use :density).");
                }
            }
            Command::Clear => {
                session.clear();
                println!("Text cleared.");
            }
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Unknown(other) => println!("Unknown command {other} (try :help)."),
        }
        log::trace!("buffer now {} bytes", session.text().len());
    }

    Ok(())
}
