// src/main.rs
use anyhow::Result;
use clap::Parser;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use typetally::{Args, run};

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    // Ignore the error if a logger was already set.
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(args)
}
