//! Text normalization for untrusted external input
//!
//! Converts free-form strings from spreadsheets, OCR output, and user entry
//! into canonical money and calendar-date values. Both normalizers are total
//! functions: malformed input yields `None`, never an error.

pub mod date;
pub mod money;

pub use date::date_to_iso;
pub use money::money_to_minor_units;
