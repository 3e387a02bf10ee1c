// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

//! Read-only queries over the fetched records. Nothing here mutates or caches.

use rust_decimal::Decimal;

use crate::input::SortDirection;
use crate::models::CurrencyRecord;

/// All records in fetch order.
pub fn list_all(records: &[CurrencyRecord]) -> Vec<&CurrencyRecord> {
    records.iter().collect()
}

/// Records whose code equals `code`, ignoring case, in fetch order.
pub fn search_by_code<'a>(records: &'a [CurrencyRecord], code: &str) -> Vec<&'a CurrencyRecord> {
    records
        .iter()
        .filter(|r| r.code.eq_ignore_ascii_case(code))
        .collect()
}

/// Records with a rate strictly above `threshold`, highest rate first.
pub fn filter_above(records: &[CurrencyRecord], threshold: Decimal) -> Vec<&CurrencyRecord> {
    let mut matches: Vec<&CurrencyRecord> = records.iter().filter(|r| r.rate > threshold).collect();
    matches.sort_by(|a, b| b.rate.cmp(&a.rate));
    matches
}

/// All records ordered by rate. Equal rates keep their fetch order.
pub fn sort_by_rate(records: &[CurrencyRecord], direction: SortDirection) -> Vec<&CurrencyRecord> {
    let mut sorted = list_all(records);
    match direction {
        SortDirection::Ascending => sorted.sort_by(|a, b| a.rate.cmp(&b.rate)),
        SortDirection::Descending => sorted.sort_by(|a, b| b.rate.cmp(&a.rate)),
    }
    sorted
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics<'a> {
    pub count: usize,
    pub max: &'a CurrencyRecord,
    pub min: &'a CurrencyRecord,
    pub average: Decimal,
}

/// Count, extremes and mean of the rates. `None` when there are no records.
///
/// On ties the earliest record in fetch order is reported for max and min.
pub fn statistics(records: &[CurrencyRecord]) -> Option<Statistics<'_>> {
    let first = records.first()?;

    let (max, min, sum) = records.iter().skip(1).fold(
        (first, first, Some(first.rate)),
        |(max, min, sum), r| {
            let max = if r.rate > max.rate { r } else { max };
            let min = if r.rate < min.rate { r } else { min };
            (max, min, sum.and_then(|s| s.checked_add(r.rate)))
        },
    );

    let count = records.len();
    let divisor = Decimal::from(count);
    let average = match sum {
        Some(sum) => sum / divisor,
        // Sum left the Decimal range: divide first, then add the shares.
        None => records
            .iter()
            .map(|r| r.rate / divisor)
            .fold(Decimal::ZERO, |acc, share| {
                acc.checked_add(share).unwrap_or(Decimal::MAX)
            }),
    };

    Some(Statistics {
        count,
        max,
        min,
        average,
    })
}
