//! User settings for the dashboard
//!
//! Settings only hold startup preferences (initial city and language, the
//! dataset seed, the TUI tick rate). Cost values are never persisted.

use serde::{Deserialize, Serialize};

use super::paths::DashboardPaths;
use crate::error::DashboardError;
use crate::models::{City, Locale};
use crate::state::DashboardState;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Locale code selected at startup
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// City name selected at startup
    #[serde(default = "default_city")]
    pub default_city: String,

    /// Seed for the synthetic dataset; a fresh seed is drawn when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_seed: Option<u64>,

    /// TUI event poll interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_locale() -> String {
    Locale::default().code().to_string()
}

fn default_city() -> String {
    City::first().name().to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_locale: default_locale(),
            default_city: default_city(),
            dataset_seed: None,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Startup locale; unsupported codes fall back to English
    pub fn locale(&self) -> Locale {
        self.initial_state().selected_locale()
    }

    /// Startup city; unknown names fall back to the first city
    pub fn city(&self) -> City {
        self.initial_state().selected_city()
    }

    /// Initial selection described by these settings
    ///
    /// Starts from the first city in English and applies the stored names
    /// through the lenient state setters.
    pub fn initial_state(&self) -> DashboardState {
        let mut state = DashboardState::default();
        state.select_city_name(&self.default_city);
        state.select_locale_code(&self.default_locale);
        state
    }

    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &DashboardPaths) -> Result<Self, DashboardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                DashboardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DashboardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DashboardPaths) -> Result<(), DashboardError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| DashboardError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
