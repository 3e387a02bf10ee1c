// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::InputError;

/// Direction for sorting records by rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// "Z" (any case) means descending. Anything else, empty included, is ascending.
    pub fn from_flag(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case("z") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

/// Trim a search code and reject it if nothing is left.
pub fn parse_search_code(input: &str) -> Result<&str, InputError> {
    let code = input.trim();
    if code.is_empty() {
        return Err(InputError::EmptyCode);
    }
    Ok(code)
}

/// Parse a threshold typed by the user.
///
/// The point form ("0.03", or with an exponent "3e-2") is tried first, then
/// the Turkish form with a decimal comma and optional dot grouping ("0,03",
/// "1.234,5"). Underscore digit separators are not accepted.
pub fn parse_threshold(input: &str) -> Result<Decimal, InputError> {
    let input = input.trim();
    if input.contains('_') {
        return Err(InputError::InvalidNumber(input.to_string()));
    }
    parse_point_decimal(input)
        .or_else(|| parse_comma_decimal(input))
        .ok_or_else(|| InputError::InvalidNumber(input.to_string()))
}

fn parse_point_decimal(input: &str) -> Option<Decimal> {
    if input.contains(',') {
        return None;
    }
    Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .ok()
}

fn parse_comma_decimal(input: &str) -> Option<Decimal> {
    if input.matches(',').count() > 1 {
        return None;
    }
    let (whole, fraction) = input.split_once(',').unwrap_or((input, ""));
    if !grouping_is_valid(whole) {
        return None;
    }
    let whole = whole.replace('.', "");
    let normalized = if fraction.is_empty() {
        whole
    } else {
        format!("{}.{}", whole, fraction)
    };
    Decimal::from_str(&normalized).ok()
}

/// Dots in the integer part are only accepted as thousands separators.
fn grouping_is_valid(whole: &str) -> bool {
    let digits = whole.trim_start_matches(['+', '-']);
    let mut groups = digits.split('.');
    let first = groups.next().unwrap_or_default();
    if !digits.contains('.') {
        return true;
    }
    (1..=3).contains(&first.len()) && groups.all(|g| g.len() == 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_threshold_point_and_comma() {
        assert_eq!(parse_threshold("0.03"), Ok(dec!(0.03)));
        assert_eq!(parse_threshold("0,03"), Ok(dec!(0.03)));
        assert_eq!(parse_threshold("  37 "), Ok(dec!(37)));
        assert_eq!(parse_threshold("-1,5"), Ok(dec!(-1.5)));
        assert_eq!(parse_threshold("1.234,5"), Ok(dec!(1234.5)));
    }

    #[test]
    fn test_parse_threshold_rejects_garbage() {
        assert_eq!(
            parse_threshold("abc"),
            Err(InputError::InvalidNumber("abc".to_string()))
        );
        assert!(parse_threshold("").is_err());
        assert!(parse_threshold("1,2,3").is_err());
        assert!(parse_threshold("12.34,5").is_err());
        assert!(parse_threshold("0,0x").is_err());
    }

    #[test]
    fn test_parse_threshold_exponent_and_underscores() {
        assert_eq!(parse_threshold("1e-2"), Ok(dec!(0.01)));
        assert_eq!(parse_threshold("3e2"), Ok(dec!(300)));
        assert_eq!(
            parse_threshold("1_000"),
            Err(InputError::InvalidNumber("1_000".to_string()))
        );
        assert!(parse_threshold("0,0_3").is_err());
    }

    #[test]
    fn test_parse_search_code() {
        assert_eq!(parse_search_code("  usd "), Ok("usd"));
        assert_eq!(parse_search_code("   "), Err(InputError::EmptyCode));
        assert_eq!(parse_search_code(""), Err(InputError::EmptyCode));
    }

    #[test]
    fn test_sort_direction_from_flag() {
        assert_eq!(SortDirection::from_flag("Z"), SortDirection::Descending);
        assert_eq!(SortDirection::from_flag("z"), SortDirection::Descending);
        assert_eq!(SortDirection::from_flag(" z "), SortDirection::Descending);
        assert_eq!(SortDirection::from_flag("A"), SortDirection::Ascending);
        assert_eq!(SortDirection::from_flag(""), SortDirection::Ascending);
        assert_eq!(SortDirection::from_flag("zz"), SortDirection::Ascending);
    }
}
