//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the projection layer.

pub mod export;
pub mod selection;
pub mod show;

pub use export::{handle_export, ExportFormat};
pub use selection::SelectionArgs;
pub use show::{handle_cities, handle_show};
