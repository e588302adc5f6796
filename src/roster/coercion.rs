//! Compensation coercion.
//!
//! Roster files carry compensation as free text, and the same column holds
//! labels such as "Total: 500000" in trailing summary rows. This module turns
//! that text into whole dollars or reports it as missing.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Parses a compensation cell into whole US dollars.
///
/// The cell is trimmed and read as a decimal number in plain
/// (`"123456.78"`) or scientific (`"1.5e5"`) notation. Fractional dollars
/// are truncated toward zero, never rounded.
///
/// # Returns
///
/// `None` ("missing") when the text is empty, not a number, negative, or
/// larger than `u64::MAX`. Digit separators (`_`, `,`) are not numbers.
///
/// # Examples
///
/// ```
/// use headcount_engine::roster::coerce_comp;
///
/// assert_eq!(coerce_comp("185000"), Some(185000));
/// assert_eq!(coerce_comp("99999.99"), Some(99999));
/// assert_eq!(coerce_comp("1.5e5"), Some(150000));
/// assert_eq!(coerce_comp("Total: 500000"), None);
/// ```
pub fn coerce_comp(raw: &str) -> Option<u64> {
    let text = raw.trim();
    if text.is_empty() || !text.chars().all(is_number_char) {
        return None;
    }

    let value = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()?;

    if value.is_sign_negative() && !value.is_zero() {
        return None;
    }

    value.trunc().to_u64()
}

/// Characters a plain or scientific decimal literal may contain.
fn is_number_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | '+' | '-' | 'e' | 'E')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_text() {
        assert_eq!(coerce_comp("120000"), Some(120000));
        assert_eq!(coerce_comp("0"), Some(0));
    }

    #[test]
    fn test_fraction_truncates_not_rounds() {
        assert_eq!(coerce_comp("120000.99"), Some(120000));
        assert_eq!(coerce_comp("0.5"), Some(0));
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(coerce_comp("  87000 "), Some(87000));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(coerce_comp("2.5e5"), Some(250000));
    }

    #[test]
    fn test_non_numeric_is_missing() {
        assert_eq!(coerce_comp(""), None);
        assert_eq!(coerce_comp("   "), None);
        assert_eq!(coerce_comp("N/A"), None);
        assert_eq!(coerce_comp("Total: 500000"), None);
        assert_eq!(coerce_comp("$120,000"), None);
        assert_eq!(coerce_comp("inf"), None);
        assert_eq!(coerce_comp("NaN"), None);
    }

    #[test]
    fn test_digit_separators_are_missing() {
        assert_eq!(coerce_comp("1__0"), None);
        assert_eq!(coerce_comp("12_5000"), None);
        assert_eq!(coerce_comp("_100"), None);
        assert_eq!(coerce_comp("100 000"), None);
    }

    #[test]
    fn test_negative_is_missing() {
        assert_eq!(coerce_comp("-1"), None);
        assert_eq!(coerce_comp("-0.5"), None);
    }

    #[test]
    fn test_overflow_is_missing() {
        assert_eq!(coerce_comp("100000000000000000000000"), None);
    }
}
