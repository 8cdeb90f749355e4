//! Free-text date normalization
//!
//! Receipts and spreadsheets arrive with incompatible locale conventions, and
//! a silently wrong guess corrupts financial history. Parsing is therefore an
//! ordered fallback where the first successful stage wins:
//!
//! 1. generic calendar text (month-name forms, then year-first numerics
//!    like ISO `2025-01-02`, recognized by their four-digit leading year)
//! 2. month-first `M/D/Y` and `M/D/YY` (two-digit years pivot at 50)
//! 3. day-first `D/M/Y` only when the first numeric group exceeds 12
//!
//! Ambiguous text like `03/04/2025` deliberately resolves month-first.
//! Numeric groups are matched by hand rather than with chrono format
//! strings: chrono's `%Y` accepts fewer than four digits, which would let
//! `12/09/25` masquerade as the year 12.

use chrono::NaiveDate;

/// Month-name formats tried before any numeric-group matching
const GENERIC_FORMATS: &[&str] = &["%b %d, %Y", "%B %d, %Y", "%d %b %Y", "%d %B %Y"];

/// Parse free-form date text into a calendar date
pub fn date_to_iso(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(date) = parse_generic(text) {
        return Some(date);
    }

    let groups = numeric_groups(text)?;
    parse_year_first(groups)
        .or_else(|| parse_month_first(groups))
        .or_else(|| parse_day_first(groups))
}

fn parse_generic(text: &str) -> Option<NaiveDate> {
    GENERIC_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

/// Split `12/31/2025`-style text into exactly three numeric groups
fn numeric_groups(text: &str) -> Option<[i32; 3]> {
    let parts: Vec<&str> = text.split(['/', '-', '.']).collect();
    if parts.len() != 3 {
        return None;
    }

    let mut groups = [0i32; 3];
    for (i, part) in parts.iter().enumerate() {
        let value: i32 = part.trim().parse().ok()?;
        if value < 0 {
            return None;
        }
        groups[i] = value;
    }
    Some(groups)
}

/// Two-digit years pivot at 50: 25 -> 2025, 78 -> 1978
fn expand_year(year: i32) -> i32 {
    if year >= 100 {
        year
    } else if year <= 50 {
        2000 + year
    } else {
        1900 + year
    }
}

/// ISO-style `Y-M-D`, recognized by its four-digit leading year
fn parse_year_first([year, month, day]: [i32; 3]) -> Option<NaiveDate> {
    if year < 1000 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

fn parse_month_first([month, day, year]: [i32; 3]) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) {
        return None;
    }
    NaiveDate::from_ymd_opt(expand_year(year), month as u32, day as u32)
}

/// Day-first is only trusted when the leading group cannot be a month
fn parse_day_first([day, month, year]: [i32; 3]) -> Option<NaiveDate> {
    if day <= 12 {
        return None;
    }
    NaiveDate::from_ymd_opt(expand_year(year), month as u32, day as u32)
}
