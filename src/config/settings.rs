//! User settings for Splitmate
//!
//! Manages the two party names, the default split, and display preferences.

use serde::{Deserialize, Serialize};

use super::paths::SplitmatePaths;
use crate::error::SplitmateError;
use crate::models::PartyNames;

/// User settings for Splitmate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Display name for Party A
    #[serde(default = "default_party_a_name")]
    pub party_a_name: String,

    /// Display name for Party B
    #[serde(default = "default_party_b_name")]
    pub party_b_name: String,

    /// Party A's default share for percentage splits (0-100)
    #[serde(default = "default_split_percent")]
    pub default_split_percent: i64,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether initial setup has been completed
    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_party_a_name() -> String {
    "Partner 1".to_string()
}

fn default_party_b_name() -> String {
    "Partner 2".to_string()
}

fn default_split_percent() -> i64 {
    50
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            party_a_name: default_party_a_name(),
            party_b_name: default_party_b_name(),
            default_split_percent: default_split_percent(),
            currency_symbol: default_currency(),
            setup_completed: false,
        }
    }
}

impl Settings {
    /// The configured party names as a model value
    pub fn party_names(&self) -> PartyNames {
        PartyNames::new(self.party_a_name.clone(), self.party_b_name.clone())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SplitmatePaths) -> Result<Self, SplitmateError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SplitmateError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SplitmateError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SplitmatePaths) -> Result<(), SplitmateError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SplitmateError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| SplitmateError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
