// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for fetching rates and for reading menu input.

/// Anything that stops us from getting a usable rate sheet. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid base currency code: '{0}'")]
    InvalidBase(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse API response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid rate for {code}: {value}")]
    InvalidRate { code: String, value: String },
}

/// Bad user input inside a menu operation. Reported, then the menu carries on.
///
/// The messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Kod boş olamaz.")]
    EmptyCode,

    #[error("Geçersiz sayı girdiniz.")]
    InvalidNumber(String),
}
