// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Duration;
use tracing::error;

use crate::api::RatesClient;
use crate::error::FetchError;
use crate::menu::Menu;
use crate::models::RateSheet;

/// Fetch the rates once, then hand them to the menu.
///
/// A failed fetch prints the error banner and returns before the menu is
/// ever drawn.
pub async fn run_app<R: BufRead, W: Write>(
    client: &RatesClient,
    base: &str,
    input: R,
    mut output: W,
    clear_screen: bool,
) -> io::Result<()> {
    let sheet = match fetch_with_spinner(client, base).await {
        Ok(sheet) => sheet,
        Err(e) => {
            error!(error = %e, "fetching rates failed");
            writeln!(output, "API'den veri alınırken hata oluştu:")?;
            writeln!(output, "{}", e)?;
            writeln!(output, "Uygulama sonlandırılıyor...")?;
            return output.flush();
        }
    };

    Menu::new(&sheet, input, output)
        .clear_screen(clear_screen)
        .run()
}

async fn fetch_with_spinner(client: &RatesClient, base: &str) -> Result<RateSheet, FetchError> {
    let spinner = if io::stderr().is_terminal() {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner());
        spinner.set_message(format!("Kurlar alınıyor ({})...", base));
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    } else {
        ProgressBar::hidden()
    };

    let result = client.fetch_rates(base).await;
    spinner.finish_and_clear();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    async fn session(status: usize, body: &str, script: &str) -> String {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/latest")
            .match_query(mockito::Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = RatesClient::new(server.url());
        let mut output = Vec::new();
        run_app(&client, "TRY", Cursor::new(script.as_bytes()), &mut output, false)
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_server_error_stops_before_menu() {
        let out = session(500, r#"{"message":"boom"}"#, "1\n\n0\n").await;
        assert!(out.contains("API'den veri alınırken hata oluştu:"));
        assert!(out.contains("500"));
        assert!(out.contains("Uygulama sonlandırılıyor..."));
        assert!(!out.contains("===== CurrencyTracker ====="));
    }

    #[tokio::test]
    async fn test_malformed_body_stops_before_menu() {
        let out = session(200, r#"{"base":"TRY"}"#, "0\n").await;
        assert!(out.contains("API'den veri alınırken hata oluştu:"));
        assert!(out.contains("Uygulama sonlandırılıyor..."));
        assert!(!out.contains("Seçiminiz: "));
    }

    #[tokio::test]
    async fn test_successful_fetch_opens_menu() {
        let body = r#"{"base":"TRY","date":"2024-05-03","rates":{"USD":0.03094,"EUR":0.02885}}"#;
        let out = session(200, body, "1\n\n0\n").await;
        assert!(out.starts_with("===== CurrencyTracker ====="));
        assert!(out.contains("USD    : 0.03094"));
        assert!(out.contains("Çıkış yapılıyor..."));
        assert!(!out.contains("hata oluştu"));
    }
}
