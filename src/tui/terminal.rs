//! Terminal setup and teardown
//!
//! Initializes and restores the terminal state, and installs a panic hook
//! so a crash never leaves the terminal in raw mode.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;
use tracing::info;

use crate::config::settings::Settings;
use crate::dataset::Dataset;
use crate::state::DashboardState;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard until the user quits
pub fn run_tui(dataset: &Dataset, settings: &Settings, state: DashboardState) -> Result<()> {
    info!(
        city = %state.selected_city(),
        locale = %state.selected_locale(),
        "starting dashboard"
    );

    let mut terminal = init_terminal()?;
    let mut app = App::new(dataset, state);
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms.max(1)));

    let outcome = run_loop(&mut terminal, &mut app, &events);

    // Restore even when the loop failed, then report the first error
    restore_terminal()?;
    outcome?;

    info!(
        city = %app.state().selected_city(),
        locale = %app.state().selected_locale(),
        "dashboard closed"
    );
    Ok(())
}

fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;
        handle_event(app, events.next()?)?;
    }
    Ok(())
}
