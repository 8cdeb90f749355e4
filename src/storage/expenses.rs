//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SplitmateError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), SplitmateError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SplitmateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for expense in file_data.expenses {
            data.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), SplitmateError> {
        let data = self
            .data
            .read()
            .map_err(|e| SplitmateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        let file_data = ExpenseData { expenses };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, SplitmateError> {
        let data = self
            .data
            .read()
            .map_err(|e| SplitmateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all expenses, newest first
    pub fn get_all(&self) -> Result<Vec<Expense>, SplitmateError> {
        let data = self
            .data
            .read()
            .map_err(|e| SplitmateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(expenses)
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), SplitmateError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SplitmateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(expense.id, expense);
        Ok(())
    }

    /// Number of stored expenses
    pub fn count(&self) -> Result<usize, SplitmateError> {
        let data = self
            .data
            .read()
            .map_err(|e| SplitmateError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CreateExpenseInput, Money, Party};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_expense(description: &str) -> Expense {
        Expense::from_input(CreateExpenseInput::equal_split(
            description,
            Money::from_cents(1000),
            Party::PartyA,
            Category::Food,
            NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            None,
        ))
    }

    #[test]
    fn test_upsert_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));

        let expense = sample_expense("Lunch");
        let id = expense.id;
        repo.upsert(expense).unwrap();

        let loaded = repo.get(id).unwrap().unwrap();
        assert_eq!(loaded.description, "Lunch");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        let repo = ExpenseRepository::new(path.clone());
        repo.upsert(sample_expense("One")).unwrap();
        repo.upsert(sample_expense("Two")).unwrap();
        repo.save().unwrap();

        let reloaded = ExpenseRepository::new(path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 2);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("missing.json"));
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }
}
