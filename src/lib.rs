//! Cost Dashboard - cost of living in fifteen Canadian cities
//!
//! This library provides the core of the `costdash` application: a synthetic
//! monthly cost dataset (rent, groceries, utilities), a small selection
//! state (city and language), an English/French string table, and pure
//! projections that turn the state into Chart.js-shaped chart configs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Cities, locales, cost categories and monthly series
//! - `dataset`: Synthetic dataset generation
//! - `state`: The selection store
//! - `i18n`: Localized strings
//! - `projection`: Chart configurations for the current selection
//! - `config`: Paths, settings and logging
//! - `error`: Custom error types
//! - `display`, `export`, `cli`, `tui`: Front ends
//!
//! # Example
//!
//! ```rust
//! use cost_dashboard::dataset::Dataset;
//! use cost_dashboard::models::{City, Locale};
//! use cost_dashboard::projection::DashboardView;
//! use cost_dashboard::state::DashboardState;
//!
//! let dataset = Dataset::generate_seeded(42);
//! let state = DashboardState::new(City::Calgary, Locale::Fr);
//! let view = DashboardView::project(&state, &dataset);
//! assert_eq!(view.rent.chart.datasets[0].label, "Loyer à Calgary (CAD/mois)");
//! ```

pub mod cli;
pub mod config;
pub mod dataset;
pub mod display;
pub mod error;
pub mod export;
pub mod i18n;
pub mod models;
pub mod projection;
pub mod state;
pub mod tui;

pub use error::DashboardError;
