//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the
//! current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, FocusedControl};
use super::event::Event;
use crate::models::{City, Locale};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Any key closes the help dialog
    if app.has_dialog() {
        app.close_dialog();
        return Ok(());
    }

    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_focus();
            return Ok(());
        }
        KeyCode::Char('l') | KeyCode::Char('L') => {
            app.toggle_locale();
            return Ok(());
        }
        _ => {}
    }

    match app.focused_control {
        FocusedControl::Cities => handle_cities_key(app, key),
        FocusedControl::Language => handle_language_key(app, key),
    }

    Ok(())
}

/// Handle keys when the city list is focused
fn handle_cities_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.next_city(),
        KeyCode::Char('k') | KeyCode::Up => app.prev_city(),
        KeyCode::Char('g') | KeyCode::Home => app.select_city(City::first()),
        KeyCode::Char('G') | KeyCode::End => app.select_city(City::ALL[City::COUNT - 1]),
        _ => {}
    }
}

/// Handle keys when the language selector is focused
fn handle_language_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('k') | KeyCode::Up | KeyCode::Enter => {
            app.toggle_locale()
        }
        KeyCode::Char('e') => app.select_locale(Locale::En),
        KeyCode::Char('f') => app.select_locale(Locale::Fr),
        _ => {}
    }
}
