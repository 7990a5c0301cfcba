//! User settings for Tally
//!
//! Manages user preferences including currency display, page size for
//! transaction listings, export date format and the default report range.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::TallyPaths;
use crate::error::TallyError;
use crate::reports::RangeMode;

/// User settings for Tally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for terminal display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of transactions per listing page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Date format for CSV exports (strftime format)
    #[serde(default = "default_export_date_format")]
    pub export_date_format: String,

    /// Report range used when `--range` is not given
    #[serde(default)]
    pub default_range: RangeMode,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_page_size() -> usize {
    30
}

fn default_export_date_format() -> String {
    "%d %b %Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            page_size: default_page_size(),
            export_date_format: default_export_date_format(),
            default_range: RangeMode::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TallyPaths) -> Result<Self, TallyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TallyError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TallyError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TallyPaths) -> Result<(), TallyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TallyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TallyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    fn validate(&self) -> Result<(), TallyError> {
        if self.page_size == 0 {
            return Err(TallyError::Config("page_size must be at least 1".into()));
        }
        if StrftimeItems::new(&self.export_date_format).any(|item| matches!(item, Item::Error)) {
            return Err(TallyError::Config(format!(
                "Invalid export_date_format: {}",
                self.export_date_format
            )));
        }
        Ok(())
    }
}
