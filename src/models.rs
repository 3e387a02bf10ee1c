// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};

/// A single exchange rate: how many units of `code` one unit of the base buys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyRecord {
    pub code: String,
    pub rate: Decimal,
}

impl CurrencyRecord {
    pub fn new(code: impl Into<String>, rate: Decimal) -> Self {
        Self {
            code: code.into(),
            rate,
        }
    }
}

/// Everything one fetch produced. Records keep the order the API sent them in.
#[derive(Debug, Clone)]
pub struct RateSheet {
    pub base: String,
    pub date: Option<NaiveDate>,
    pub records: Vec<CurrencyRecord>,
}

/// Body of `GET /latest`.
///
/// `rates` is kept as a raw JSON map so the arrival order survives and each
/// value can be checked on its own. Other fields (`amount`) are ignored.
#[derive(Debug, Deserialize)]
pub struct LatestRatesResponse {
    pub base: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub rates: Map<String, Value>,
}
