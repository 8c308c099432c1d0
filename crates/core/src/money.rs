//! Money helpers.
//!
//! Amounts are `rust_decimal::Decimal` throughout; there is no binary
//! floating point on any money path.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to whole cents, halves away from zero (`52.485` -> `52.49`).
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Display symbol for an ISO currency code. Unknown codes are shown as-is.
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "USD" | "CAD" | "AUD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        other => other,
    }
}

/// Format an amount with two decimals and thousands separators, e.g. `$15,420.50`.
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    let rounded = round_cents(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{symbol}{grouped}.{frac}")
}
