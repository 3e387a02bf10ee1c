// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

mod api;
mod app;
mod cli;
mod config;
mod error;
mod input;
mod logging;
mod menu;
mod models;
mod queries;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};

use crate::api::RatesClient;
use crate::cli::Cli;
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();
    let config = Config::resolve(&cli)?;

    let client = RatesClient::new(config.api_url.as_str());
    let stdout = io::stdout();
    let clear_screen = config.clear_screen && stdout.is_terminal();

    app::run_app(
        &client,
        &config.base_currency,
        io::stdin().lock(),
        stdout.lock(),
        clear_screen,
    )
    .await
    .context("Console I/O failed")?;

    Ok(())
}
