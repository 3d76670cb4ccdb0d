//! User settings for Bistro
//!
//! Manages kitchen preferences including catalog sizing, order limits and the
//! revenue ledger policy.

use serde::{Deserialize, Serialize};

use super::paths::BistroPaths;
use crate::error::BistroError;

/// Revenue ledger settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LedgerPolicy {
    /// Whether the push that takes the completed stack from empty to one
    /// element adds to the running total.
    ///
    /// Defaults to `false`, which matches how existing ledgers were built.
    #[serde(default)]
    pub count_first_push: bool,
}

/// User settings for Bistro
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Initial slot count of the menu catalog
    #[serde(default = "default_menu_capacity")]
    pub menu_capacity: usize,

    /// Maximum number of menu items a single order may hold
    #[serde(default = "default_max_items_per_order")]
    pub max_items_per_order: usize,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Revenue ledger policy
    #[serde(default)]
    pub ledger: LedgerPolicy,
}

fn default_schema_version() -> u32 {
    1
}

fn default_menu_capacity() -> usize {
    100
}

fn default_max_items_per_order() -> usize {
    10
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            menu_capacity: default_menu_capacity(),
            max_items_per_order: default_max_items_per_order(),
            currency_symbol: default_currency(),
            ledger: LedgerPolicy::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BistroPaths) -> Result<Self, BistroError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BistroError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BistroError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BistroPaths) -> Result<(), BistroError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BistroError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            BistroError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
