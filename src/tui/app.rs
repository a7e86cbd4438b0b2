//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The projection is recomputed on every selection change, so rendering
//! never reads stale chart data.

use crate::dataset::Dataset;
use crate::models::{City, Locale};
use crate::projection::DashboardView;
use crate::state::DashboardState;

/// Which control currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedControl {
    /// City list
    #[default]
    Cities,
    /// Language selector
    Language,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The synthetic dataset, read-only
    pub dataset: &'a Dataset,

    /// Current selection
    state: DashboardState,

    /// Projection of the current selection
    view: DashboardView,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which control is focused
    pub focused_control: FocusedControl,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(dataset: &'a Dataset, state: DashboardState) -> Self {
        Self {
            dataset,
            state,
            view: DashboardView::project(&state, dataset),
            should_quit: false,
            focused_control: FocusedControl::default(),
            active_dialog: ActiveDialog::default(),
            status_message: None,
        }
    }

    /// Current selection
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Projection of the current selection
    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    fn refresh(&mut self) {
        self.view = DashboardView::project(&self.state, self.dataset);
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Select a city
    pub fn select_city(&mut self, city: City) {
        self.state.set_city(city);
        self.refresh();
        self.clear_status();
    }

    /// Select a locale
    pub fn select_locale(&mut self, locale: Locale) {
        self.state.set_locale(locale);
        self.refresh();
        self.set_status(locale.option_label());
    }

    /// Move to the next city
    pub fn next_city(&mut self) {
        self.select_city(self.state.selected_city().next());
    }

    /// Move to the previous city
    pub fn prev_city(&mut self) {
        self.select_city(self.state.selected_city().prev());
    }

    /// Switch to the other locale
    pub fn toggle_locale(&mut self) {
        self.select_locale(self.state.selected_locale().toggled());
    }

    /// Toggle focus between the city list and the language selector
    pub fn toggle_focus(&mut self) {
        self.focused_control = match self.focused_control {
            FocusedControl::Cities => FocusedControl::Language,
            FocusedControl::Language => FocusedControl::Cities,
        };
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_follows_selection() {
        let dataset = Dataset::generate_seeded(1);
        let mut app = App::new(&dataset, DashboardState::default());

        app.select_city(City::Vancouver);
        assert_eq!(app.view().city, City::Vancouver);
        assert_eq!(
            app.view().rent.chart.datasets[0].data,
            dataset.rent(City::Vancouver).values()
        );

        app.toggle_locale();
        assert_eq!(app.view().locale, Locale::Fr);
        assert_eq!(app.view().title, "Tableau du Coût de la Vie");
        assert_eq!(app.status_message.as_deref(), Some("Français (CA)"));
    }

    #[test]
    fn test_focus_and_dialogs() {
        let dataset = Dataset::generate_seeded(1);
        let mut app = App::new(&dataset, DashboardState::default());

        assert_eq!(app.focused_control, FocusedControl::Cities);
        app.toggle_focus();
        assert_eq!(app.focused_control, FocusedControl::Language);

        assert!(!app.has_dialog());
        app.open_dialog(ActiveDialog::Help);
        assert!(app.has_dialog());
        app.close_dialog();
        assert!(!app.has_dialog());
    }
}
