//! Terminal User Interface module
//!
//! An interactive dashboard built on ratatui: a language selector and city
//! list on the left, rent and utilities trends plus the grocery comparison
//! on the right.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Dialogs
pub mod dialogs;

// Layout and colors
pub mod layout;
pub mod theme;

pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
