// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration: where the dataset lives and how the autocomplete behaves.
//!
//! Read from a JSON file. Every field has a default, so `{}` is a valid config.
//! `COSTAR_DB` overrides the database path; CLI flags override both.

use crate::error::{CostarError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides `database`.
pub const DATABASE_ENV: &str = "COSTAR_DB";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Dataset file: `.json` for an in-memory dataset, anything else is SQLite.
    pub database: Option<PathBuf>,
    pub autocomplete: AutocompleteSettings,
}

/// Tuning shared by every autocomplete field.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutocompleteSettings {
    /// Minimum trimmed characters before a lookup (and before submission).
    pub min_chars: usize,
    /// Quiet period before a lookup fires.
    pub debounce_ms: u64,
    /// Delay before a blurred field closes its list.
    pub blur_grace_ms: u64,
    /// Suggestions shown after ranking.
    pub display_limit: usize,
    /// Candidates fetched from the store before ranking.
    pub fetch_limit: usize,
}

impl Default for AutocompleteSettings {
    fn default() -> Self {
        Self {
            min_chars: 2,
            debounce_ms: 200,
            blur_grace_ms: 150,
            display_limit: 8,
            fetch_limit: 50,
        }
    }
}

impl AutocompleteSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn blur_grace(&self) -> Duration {
        Duration::from_millis(self.blur_grace_ms)
    }
}

impl Config {
    /// Load a config file and apply the environment override.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let mut config = Self::from_json(&raw)?;
        config.apply_env();
        Ok(config)
    }

    /// Defaults plus the environment override, for runs without a file.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(path) = std::env::var(DATABASE_ENV) {
            if !path.is_empty() {
                self.database = Some(PathBuf::from(path));
            }
        }
    }

    fn validate(&self) -> Result<()> {
        let ac = &self.autocomplete;
        if ac.min_chars == 0 {
            return Err(CostarError::Config("minChars must be at least 1".into()));
        }
        if ac.display_limit == 0 {
            return Err(CostarError::Config("displayLimit must be at least 1".into()));
        }
        if ac.fetch_limit < ac.display_limit {
            return Err(CostarError::Config(format!(
                "fetchLimit ({}) must not be below displayLimit ({})",
                ac.fetch_limit, ac.display_limit
            )));
        }
        Ok(())
    }
}
