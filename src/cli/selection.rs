//! Selection arguments shared by CLI commands
//!
//! Both flags go through the state's string setters. `--city` is free text
//! typed by the user, so a name the setter ignores is reported as an error
//! here. `--lang` falls back to English like every other locale input.

use clap::Args;

use crate::config::settings::Settings;
use crate::error::{DashboardError, DashboardResult};
use crate::state::DashboardState;

/// City and language flags
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// City to display (defaults to the configured city)
    #[arg(short, long)]
    pub city: Option<String>,

    /// Display language: en or fr (defaults to the configured language)
    #[arg(short, long, env = "COST_DASHBOARD_LANG")]
    pub lang: Option<String>,
}

impl SelectionArgs {
    /// Resolve the flags against the settings into a selection
    pub fn resolve(&self, settings: &Settings) -> DashboardResult<DashboardState> {
        let mut state = settings.initial_state();

        if let Some(name) = &self.city {
            if !state.select_city_name(name) {
                return Err(DashboardError::city_not_found(name));
            }
        }

        if let Some(code) = &self.lang {
            state.select_locale_code(code);
        }

        Ok(state)
    }
}
