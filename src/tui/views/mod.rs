//! TUI Views module
//!
//! Contains the header, sidebar, the three chart panels and the status bar.

pub mod comparison;
pub mod header;
pub mod sidebar;
pub mod status_bar;
pub mod trend;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);
    sidebar::render(frame, app, layout.sidebar);

    let view = app.view();
    trend::render(frame, &view.rent, view.locale, layout.rent);
    trend::render(frame, &view.utilities, view.locale, layout.utilities);
    comparison::render(frame, &view.grocery, view.locale, view.city, layout.grocery);

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}
