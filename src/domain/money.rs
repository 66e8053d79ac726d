//! Locale-tolerant numeric normalization and parsing.
//!
//! Slip screenshots come out of the OCR step with Brazilian-style
//! formatting: comma decimal separators and assorted whitespace used
//! as thousands grouping (including the non-breaking variants some
//! calculators emit). Normalization is a pure character transform;
//! parsing and range checks stay with the caller.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Whitespace variants stripped from numeric strings: regular space,
/// non-breaking space, narrow no-break space, thin space.
const NUMERIC_WHITESPACE: [char; 4] = [' ', '\u{a0}', '\u{202f}', '\u{2009}'];

/// Normalize a locale-formatted number into a canonical decimal string.
///
/// Strips all whitespace variants and converts comma decimal separators
/// to dots. Idempotent: an already-canonical string passes through
/// unchanged. Performs no validation of magnitude or sign.
#[must_use]
pub fn sanitize_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| !NUMERIC_WHITESPACE.contains(c))
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

/// Parse a locale-formatted amount into a [`Decimal`].
///
/// # Errors
///
/// Returns [`Error::Parse`] if the sanitized string is not a valid
/// decimal number.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let canonical = sanitize_number(raw);
    Decimal::from_str(&canonical)
        .map_err(|e| Error::Parse(format!("invalid amount '{raw}': {e}")))
}

/// Parse an amount, falling back to zero for anything unparseable.
///
/// Extraction paths use this so a garbled OCR field degrades to `0`
/// for the user to correct instead of aborting the whole slip.
#[must_use]
pub fn parse_amount_or_zero(raw: &str) -> Decimal {
    parse_amount(raw).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sanitize_converts_comma_and_strips_spaces() {
        assert_eq!(sanitize_number("1 234,56"), "1234.56");
        assert_eq!(sanitize_number("1\u{a0}234,56"), "1234.56");
        assert_eq!(sanitize_number("1\u{202f}234,56"), "1234.56");
        assert_eq!(sanitize_number("1\u{2009}234,56"), "1234.56");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for raw in ["1 234,56", "1234.56", "-2,5", "", "abc", "10"] {
            let once = sanitize_number(raw);
            assert_eq!(sanitize_number(&once), once);
        }
    }

    #[test]
    fn sanitize_does_not_validate() {
        // Garbage in, garbage out - by contract.
        assert_eq!(sanitize_number("12,34,56"), "12.34.56");
        assert_eq!(sanitize_number("R$10"), "R$10");
    }

    #[test]
    fn parse_amount_handles_locale_input() {
        assert_eq!(parse_amount("1 234,56").unwrap(), dec!(1234.56));
        assert_eq!(parse_amount("2.05").unwrap(), dec!(2.05));
        assert_eq!(parse_amount("-3,1").unwrap(), dec!(-3.1));
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert_eq!(parse_amount_or_zero("abc"), Decimal::ZERO);
    }
}
