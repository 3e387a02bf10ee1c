// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::error::FetchError;
use crate::models::{CurrencyRecord, LatestRatesResponse, RateSheet};

pub const DEFAULT_API_URL: &str = "https://api.frankfurter.app";

/// Client for a Frankfurter-style `latest` endpoint.
#[derive(Clone)]
pub struct RatesClient {
    client: Client,
    api_url: String,
}

impl RatesClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the latest rates for `base_currency`. The records come back in
    /// the API's order, together with the base and date it reported.
    pub async fn fetch_rates(&self, base_currency: &str) -> Result<RateSheet, FetchError> {
        let base = normalize_base(base_currency)?;
        let url = format!("{}/latest", self.api_url);
        debug!(%url, %base, "requesting latest rates");

        let response = self
            .client
            .get(&url)
            .query(&[("from", base.as_str())])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: text });
        }

        let sheet = parse_latest(&text)?;
        if sheet.base != base {
            warn!(requested = %base, returned = %sheet.base, "API answered with a different base");
        }
        info!(count = sheet.records.len(), base = %sheet.base, "rates fetched");

        Ok(sheet)
    }
}

/// Upper-case the base code and check it looks like an ISO 4217 code.
fn normalize_base(base_currency: &str) -> Result<String, FetchError> {
    let base = base_currency.trim().to_ascii_uppercase();
    if base.len() != 3 || !base.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(FetchError::InvalidBase(base_currency.to_string()));
    }
    Ok(base)
}

/// Turn a `latest` response body into a rate sheet, one record per key in
/// the order the keys arrived.
pub fn parse_latest(body: &str) -> Result<RateSheet, FetchError> {
    let response: LatestRatesResponse = serde_json::from_str(body)?;

    let records = response
        .rates
        .into_iter()
        .map(|(code, value)| {
            let rate = rate_from_json(&value).ok_or_else(|| FetchError::InvalidRate {
                code: code.clone(),
                value: value.to_string(),
            })?;
            Ok(CurrencyRecord::new(code, rate))
        })
        .collect::<Result<Vec<_>, FetchError>>()?;

    Ok(RateSheet {
        base: response.base,
        date: response.date,
        records,
    })
}

/// Only non-negative JSON numbers are rates.
fn rate_from_json(value: &Value) -> Option<Decimal> {
    let number = value.as_number()?;
    let rate = Decimal::from_str(&number.to_string())
        .or_else(|_| Decimal::from_scientific(&number.to_string()))
        .ok()?;
    (!rate.is_sign_negative()).then_some(rate)
}
