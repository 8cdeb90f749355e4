//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod balance;
pub mod expense;
pub mod import;
pub mod scan;
pub mod settlement;

pub use balance::handle_balance_command;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use import::handle_import_command;
pub use scan::handle_scan_command;
pub use settlement::{handle_settle_command, SettleCommands};
