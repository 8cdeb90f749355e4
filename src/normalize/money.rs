//! Free-text money normalization
//!
//! Turns whatever a spreadsheet cell or OCR field contains into minor units,
//! or nothing at all. Never panics: garbage in, `None` out.

use crate::models::Money;

/// Parse free-form money text into minor units
///
/// Strips everything except digits, separators, and sign, removes thousands
/// separators, parses as decimal dollars, and rounds to the nearest cent.
/// Accepts `$12.34`, `12.34`, `12`, `1,234.50`, `-5.00`.
pub fn money_to_minor_units(text: &str) -> Option<Money> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();
    let cleaned = cleaned.replace(',', "");

    if cleaned.is_empty() || !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let dollars: f64 = cleaned.parse().ok()?;
    if !dollars.is_finite() {
        return None;
    }

    // f64::round is round-half-away-from-zero, which is the standard
    // rounding for currency text.
    let cents = (dollars * 100.0).round();
    if cents.abs() >= i64::MAX as f64 {
        return None;
    }

    Some(Money::from_cents(cents as i64))
}
