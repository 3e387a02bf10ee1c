// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use clap::Parser;
use std::path::PathBuf;

/// Fetch today's exchange rates once, then browse them from a menu.
#[derive(Debug, Parser)]
#[command(name = "currency-tracker", version, about)]
pub struct Cli {
    /// Base currency the rates are quoted against (e.g. TRY)
    #[arg(short, long, env = "CURRENCY_TRACKER_BASE")]
    pub base: Option<String>,

    /// Root URL of the rates API
    #[arg(long, env = "CURRENCY_TRACKER_API_URL")]
    pub api_url: Option<String>,

    /// Path to a TOML config file (default: ./currency-tracker.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Don't clear the terminal before drawing the menu
    #[arg(long)]
    pub no_clear: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["currency-tracker"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.no_clear);
    }
}
