// src/config.rs
use anyhow::{Context as _, Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// File looked up in the working directory.
pub const CONFIG_FILE: &str = ".typetally.toml";

/// Built-in density minimum word length.
pub const DEFAULT_MIN_LENGTH: usize = 1;

/// Built-in one-shot density table row limit.
pub const DEFAULT_TOP: usize = 10;

/// Optional per-directory defaults. Command-line flags win over these,
/// and these win over the built-in defaults.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub min_length: Option<usize>,
    pub top: Option<usize>,
}

impl Config {
    /// Loads `.typetally.toml` from `dir`. A missing file is not an
    /// error; it just means "no overrides".
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or does
    /// not parse as TOML with the expected keys.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            log::debug!("no {CONFIG_FILE} found, using built-in defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse {}: {e}", path.display()))
    }

    /// Effective density minimum length: flag over file over built-in.
    #[must_use]
    pub fn resolve_min_length(&self, flag: Option<usize>) -> usize {
        flag.or(self.min_length).unwrap_or(DEFAULT_MIN_LENGTH)
    }

    /// Effective one-shot row limit: flag over file over built-in.
    #[must_use]
    pub fn resolve_top(&self, flag: Option<usize>) -> usize {
        flag.or(self.top).unwrap_or(DEFAULT_TOP)
    }
}
