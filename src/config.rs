// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_API_URL;
use crate::cli::Cli;

pub const DEFAULT_CONFIG_FILE: &str = "currency-tracker.toml";
pub const DEFAULT_BASE_CURRENCY: &str = "TRY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub base_currency: String,
    pub clear_screen: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            clear_screen: true,
        }
    }
}

impl Config {
    /// Build the effective configuration: file (or defaults), then whatever
    /// the command line and environment set.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => load_config(path)?,
            None => load_config_or_default(&default_config_path())?,
        };
        config.apply_cli(cli);
        Ok(config)
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(base) = &cli.base {
            self.base_currency = base.clone();
        }
        if let Some(url) = &cli.api_url {
            self.api_url = url.clone();
        }
        if cli.no_clear {
            self.clear_screen = false;
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// Like [`load_config`], but a missing file just means defaults.
pub fn load_config_or_default(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    load_config(path)
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}
