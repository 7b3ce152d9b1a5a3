// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_MIN_LENGTH};
use crate::core::analyzer::{DensityOptions, compute_text_stats, compute_word_density};
use crate::repl;
use crate::utils::{print_density_top, print_stats, strip_frontmatter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File to analyze (reads standard input when omitted)
    pub file: Option<PathBuf>,

    /// Start an interactive session instead of one-shot analysis
    #[arg(short, long)]
    pub interactive: bool,

    /// Also print the word density table
    #[arg(short, long)]
    pub density: bool,

    /// Number of density rows to print, 0 for all (defaults to 10)
    #[arg(short = 't', long)]
    pub top: Option<usize>,

    /// Minimum word length kept in the density table (defaults to 1)
    #[arg(short = 'm', long)]
    pub min_length: Option<usize>,

    /// Skip a leading YAML frontmatter block before analysis
    #[arg(short = 's', long)]
    pub skip_frontmatter: bool,

    /// Emit the statistics as JSON instead of tables
    #[arg(short, long)]
    pub json: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(args: Args) -> Result<()> {
    let config = Config::load(&env::current_dir()?)?;
    let min_length = config.resolve_min_length(args.min_length);
    let top = config.resolve_top(args.top);

    if args.interactive {
        return repl::run_session(min_length);
    }

    let raw = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("Failed to read standard input")?,
    };
    let text = if args.skip_frontmatter {
        strip_frontmatter(&raw)
    } else {
        raw.as_str()
    };
    log::debug!(
        "analyzing {} bytes (min_length {min_length})",
        text.len()
    );

    let mut stats = compute_text_stats(text);
    if min_length != DEFAULT_MIN_LENGTH {
        stats.word_density = compute_word_density(text, &DensityOptions { min_length });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    print_stats(&stats);
    if args.density {
        println!();
        print_density_top(&stats.word_density, top);
    }

    Ok(())
}
