//! Export module for the dashboard
//!
//! Provides export of projections and data in multiple formats:
//! - JSON: Chart.js-ready chart configurations with localized texts
//! - YAML: The same export, human-readable
//! - CSV: The raw synthetic dataset (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_dataset_csv;
pub use json::{export_dashboard_json, DashboardExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_dashboard_yaml;
