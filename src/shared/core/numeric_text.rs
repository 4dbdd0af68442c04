// Conversion between pt-BR currency text and amounts.
//
// Parsing is best effort: anything that does not read as a number becomes 0.
// Formatting is display only and always renders BRL with two fraction digits.

use num_format::{Locale, ToFormattedString};

pub const CURRENCY_SYMBOL: &str = "R$";
pub const PLACEHOLDER: &str = "—";

/// Parse user-entered currency text such as `6.000,00` or `R$ 1.234,56`.
///
/// `.` is read as a grouping separator and the first `,` as the decimal mark.
/// Absent, empty or unparseable text yields `0.0`.
pub fn parse_currency<'a>(value: impl Into<Option<&'a str>>) -> f64 {
    let Some(text) = value.into() else {
        return 0.0;
    };
    let cleaned: String = text
        .replace(CURRENCY_SYMBOL, "")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();
    cleaned
        .replacen(',', ".", 1)
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .unwrap_or(0.0)
}

/// Render an amount as `R$ 1.234,56`. Missing or non-finite amounts render as `—`.
pub fn format_currency(value: impl Into<Option<f64>>) -> String {
    let Some(amount) = value.into().filter(|amount| amount.is_finite()) else {
        return PLACEHOLDER.to_string();
    };
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!(
        "{sign}{CURRENCY_SYMBOL} {},{:02}",
        (cents / 100).to_formatted_string(&Locale::pt),
        cents % 100
    )
}

/// Dependents are entered as text; anything but a non-negative integer counts as none.
pub fn parse_dependents(value: &str) -> u32 {
    value.trim().parse::<u32>().unwrap_or(0)
}
