//! Settlement repository for JSON storage
//!
//! Manages loading and saving settlements to settlements.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SplitmateError;
use crate::models::{Settlement, SettlementId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable settlement data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SettlementData {
    settlements: Vec<Settlement>,
}

/// Repository for settlement persistence
pub struct SettlementRepository {
    path: PathBuf,
    data: RwLock<HashMap<SettlementId, Settlement>>,
}

impl SettlementRepository {
    /// Create a new settlement repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load settlements from disk
    pub fn load(&self) -> Result<(), SplitmateError> {
        let file_data: SettlementData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SplitmateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for settlement in file_data.settlements {
            data.insert(settlement.id, settlement);
        }

        Ok(())
    }

    /// Save settlements to disk
    pub fn save(&self) -> Result<(), SplitmateError> {
        let data = self
            .data
            .read()
            .map_err(|e| SplitmateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut settlements: Vec<_> = data.values().cloned().collect();
        settlements.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        let file_data = SettlementData { settlements };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get all settlements, newest first
    pub fn get_all(&self) -> Result<Vec<Settlement>, SplitmateError> {
        let data = self
            .data
            .read()
            .map_err(|e| SplitmateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut settlements: Vec<_> = data.values().cloned().collect();
        settlements.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(settlements)
    }

    /// Insert or update a settlement
    pub fn upsert(&self, settlement: Settlement) -> Result<(), SplitmateError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SplitmateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(settlement.id, settlement);
        Ok(())
    }
}
