//! Logging setup
//!
//! CLI commands log to stderr. The TUI owns the terminal, so it logs to a
//! file under the config directory instead. `RUST_LOG` overrides the filter.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::paths::DashboardPaths;
use crate::error::{DashboardError, DashboardResult};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "cost_dashboard=info";

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("cost_dashboard=debug")
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    })
}

/// Log to stderr
pub fn init_stderr(verbose: bool) -> DashboardResult<()> {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| DashboardError::Config(format!("Failed to initialize logging: {}", e)))
}

/// Log to the dashboard log file, appending
pub fn init_file(paths: &DashboardPaths, verbose: bool) -> DashboardResult<()> {
    paths.ensure_directories()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| DashboardError::Io(format!("Failed to open log file: {}", e)))?;

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .map_err(|e| DashboardError::Config(format!("Failed to initialize logging: {}", e)))
}
