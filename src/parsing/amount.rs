//! Amount parsing for locale-formatted currency values
//!
//! Accepts plain numbers and strings like `"R$ 1.234,56"`, `"1,5"` or
//! `"100.00"`. Anything unparseable becomes `0.0` so that one bad cell does not
//! abort a whole report.

use crate::models::Cell;

/// Currency marker stripped before conversion
pub const CURRENCY_MARKER: &str = "R$";

/// Parse an amount cell
pub fn parse_amount(cell: &Cell) -> f64 {
    match cell {
        Cell::Number(n) if n.is_finite() => *n,
        Cell::Text(s) => parse_amount_str(s),
        _ => 0.0,
    }
}

/// Parse an amount string
///
/// When both `.` and `,` appear, `.` is a thousands separator and `,` the
/// decimal separator. A lone `,` is the decimal separator.
pub fn parse_amount_str(raw: &str) -> f64 {
    try_parse_amount_str(raw).unwrap_or(0.0)
}

/// Parse an amount string, returning `None` for blank or malformed input
///
/// Same separator rules as [`parse_amount_str`], for callers that must tell
/// a typo apart from zero.
pub fn try_parse_amount_str(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .replace(CURRENCY_MARKER, "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    let cleaned = if cleaned.contains('.') && cleaned.contains(',') {
        cleaned.replace('.', "")
    } else {
        cleaned
    };

    cleaned
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_parse_distinguishes_malformed_from_zero() {
        assert_eq!(try_parse_amount_str("300,50"), Some(300.5));
        assert_eq!(try_parse_amount_str("R$ 1.234,56"), Some(1234.56));
        assert_eq!(try_parse_amount_str("0"), Some(0.0));
        assert_eq!(try_parse_amount_str("abc"), None);
        assert_eq!(try_parse_amount_str(" "), None);
    }

    #[test]
    fn test_missing_values_are_zero() {
        assert_eq!(parse_amount(&Cell::Empty), 0.0);
        assert_eq!(parse_amount(&Cell::text("")), 0.0);
        assert_eq!(parse_amount_str(""), 0.0);
        assert_eq!(parse_amount_str("   "), 0.0);
    }

    #[test]
    fn test_brazilian_format() {
        assert_eq!(parse_amount_str("R$ 1.234,56"), 1234.56);
        assert_eq!(parse_amount_str("R$50,00"), 50.0);
        assert_eq!(parse_amount_str("1.234.567,89"), 1234567.89);
        assert_eq!(parse_amount_str("1,5"), 1.5);
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_amount_str("100"), 100.0);
        assert_eq!(parse_amount_str("100.25"), 100.25);
        assert_eq!(parse_amount(&Cell::Number(42.5)), 42.5);
    }

    #[test]
    fn test_whitespace_inside_is_removed() {
        assert_eq!(parse_amount_str(" 1 234,50 "), 1234.5);
        assert_eq!(parse_amount_str("R$\u{a0}10,00"), 10.0);
    }

    #[test]
    fn test_malformed_is_zero() {
        assert_eq!(parse_amount_str("abc"), 0.0);
        assert_eq!(parse_amount_str("R$"), 0.0);
        assert_eq!(parse_amount_str("12,34,56"), 0.0);
        assert_eq!(parse_amount_str("inf"), 0.0);
        assert_eq!(parse_amount_str("NaN"), 0.0);
        assert_eq!(parse_amount(&Cell::Number(f64::INFINITY)), 0.0);
        assert_eq!(parse_amount(&Cell::Bool(true)), 0.0);
    }
}
