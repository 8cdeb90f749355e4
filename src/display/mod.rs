//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display:
//! registers, balance summaries, import previews, and scan results.

pub mod balance;
pub mod expense;
pub mod preview;
pub mod receipt;

pub use balance::format_balance;
pub use expense::{format_expense_register, format_expense_row};
pub use preview::{format_outcome, format_preview};
pub use receipt::format_extraction;
