//! Storage layer for Splitmate
//!
//! Provides JSON file storage with atomic writes, plus the narrow
//! `ExpenseStore` contract the ingestion pipeline commits through. The store
//! is always passed explicitly; there is no process-wide client.

pub mod expenses;
pub mod file_io;
pub mod settlements;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use settlements::SettlementRepository;

use crate::config::paths::SplitmatePaths;
use crate::error::{SplitmateError, SplitmateResult};
use crate::models::{CreateExpenseInput, Expense, Settlement};

/// The persistence contract consumed by the ingestion pipeline
///
/// One call per committed row. Implementations may fail per call; the
/// pipeline treats any error as a per-row failure and does not interpret
/// error subtypes.
pub trait ExpenseStore {
    /// Validate and persist a new expense, assigning its identity
    fn create_expense(&self, input: CreateExpenseInput) -> SplitmateResult<Expense>;
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SplitmatePaths,
    pub expenses: ExpenseRepository,
    pub settlements: SettlementRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SplitmatePaths) -> Result<Self, SplitmateError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            settlements: SettlementRepository::new(paths.settlements_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SplitmatePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), SplitmateError> {
        self.expenses.load()?;
        self.settlements.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), SplitmateError> {
        self.expenses.save()?;
        self.settlements.save()?;
        Ok(())
    }

    /// Validate and persist a new settlement
    pub fn create_settlement(&self, settlement: Settlement) -> SplitmateResult<Settlement> {
        settlement
            .validate()
            .map_err(|e| SplitmateError::Validation(e.to_string()))?;

        self.settlements.upsert(settlement.clone())?;
        self.settlements.save()?;
        Ok(settlement)
    }
}

impl ExpenseStore for Storage {
    fn create_expense(&self, input: CreateExpenseInput) -> SplitmateResult<Expense> {
        input
            .validate()
            .map_err(|e| SplitmateError::Validation(e.to_string()))?;

        let expense = Expense::from_input(input);
        self.expenses.upsert(expense.clone())?;
        self.expenses.save()?;
        Ok(expense)
    }
}
