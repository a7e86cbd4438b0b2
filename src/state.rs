//! Selection state
//!
//! The dashboard holds exactly two pieces of state: the selected city and
//! the selected locale. Setters replace the value unconditionally; string
//! inputs from the outer surfaces fall back instead of failing.

use tracing::{debug, warn};

use crate::models::{City, Locale};

/// Current user selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardState {
    selected_city: City,
    selected_locale: Locale,
}

impl DashboardState {
    /// Create state with explicit initial values
    pub fn new(selected_city: City, selected_locale: Locale) -> Self {
        Self {
            selected_city,
            selected_locale,
        }
    }

    /// Currently selected city
    pub fn selected_city(&self) -> City {
        self.selected_city
    }

    /// Currently selected locale
    pub fn selected_locale(&self) -> Locale {
        self.selected_locale
    }

    /// Select a city
    pub fn set_city(&mut self, city: City) {
        debug!(city = %city, "City selected");
        self.selected_city = city;
    }

    /// Select a locale
    pub fn set_locale(&mut self, locale: Locale) {
        debug!(locale = %locale, "Locale selected");
        self.selected_locale = locale;
    }

    /// Select a city by name
    ///
    /// Unknown names leave the selection unchanged. Returns whether the name
    /// was recognized.
    pub fn select_city_name(&mut self, name: &str) -> bool {
        match City::parse(name) {
            Some(city) => {
                self.set_city(city);
                true
            }
            None => {
                warn!(name, "Ignoring unknown city");
                false
            }
        }
    }

    /// Select a locale by code; unsupported codes select English
    pub fn select_locale_code(&mut self, code: &str) {
        let locale = Locale::parse(code).unwrap_or_else(|| {
            warn!(code, "Unsupported locale, falling back to English");
            Locale::default()
        });
        self.set_locale(locale);
    }

    /// Move to the next city, wrapping after the last one
    pub fn next_city(&mut self) {
        self.set_city(self.selected_city.next());
    }

    /// Move to the previous city, wrapping before the first one
    pub fn prev_city(&mut self) {
        self.set_city(self.selected_city.prev());
    }

    /// Switch to the other locale
    pub fn toggle_locale(&mut self) {
        self.set_locale(self.selected_locale.toggled());
    }
}
