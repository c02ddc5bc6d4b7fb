//! Amount formatting for terminal display
//!
//! Amounts use `.` as the thousands separator and `,` as the decimal
//! separator, with two decimals rounded half-up. Rounding goes through the
//! shortest decimal representation of the value, so `2.675` renders as
//! `2,68` even though the nearest `f64` sits slightly below it.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Format an amount as `1.234,56`
pub fn format_brl(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => {
            let mut rounded =
                decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        // Beyond Decimal's range; plain float formatting is the best we can do
        Err(_) => format!("{:.2}", value),
    };

    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let sign = if int_part.chars().chain(frac_part.chars()).all(|c| c == '0') {
        ""
    } else {
        sign
    };

    format!("{}{},{}", sign, group_thousands(int_part), frac_part)
}

/// Format an amount with a currency symbol, e.g. `R$ 1.234,56`
pub fn format_currency(value: f64, symbol: &str) -> String {
    format!("{} {}", symbol, format_brl(value))
}

/// Format a balance, red when negative and green when positive
pub fn format_balance_colored(value: f64, symbol: &str) -> String {
    let text = format_currency(value, symbol);
    if value < 0.0 {
        format!("\x1b[31m{}\x1b[0m", text)
    } else if value > 0.0 {
        format!("\x1b[32m{}\x1b[0m", text)
    } else {
        text
    }
}

/// Format a ratio as a percentage, e.g. `0.5` -> `50%`
pub fn format_percentage(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

/// Progress bar for a ratio, capped at full
pub fn progress_bar(ratio: f64, width: usize) -> String {
    if !ratio.is_finite() || ratio <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((ratio.min(1.0)) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
