//! CLI command for exporting the dashboard
//!
//! JSON and YAML exports carry the projected chart configurations; CSV
//! carries the raw dataset.

use crate::dataset::Dataset;
use crate::error::{DashboardError, DashboardResult};
use crate::export::{csv, json, yaml};
use crate::state::DashboardState;
use clap::ValueEnum;
use std::fs;
use std::path::Path;
use tracing::info;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON chart configurations (Chart.js field names)
    Json,
    /// YAML chart configurations, human-readable
    Yaml,
    /// CSV of the raw dataset
    Csv,
}

/// Handle the export command
pub fn handle_export(
    state: &DashboardState,
    dataset: &Dataset,
    output: &Path,
    format: ExportFormat,
    pretty: bool,
) -> DashboardResult<()> {
    // Nothing touches the file until serialization succeeded
    let bytes = render_export(state, dataset, format, pretty)?;
    fs::write(output, bytes).map_err(|e| {
        DashboardError::Export(format!("Failed to write {}: {}", output.display(), e))
    })?;

    match format {
        ExportFormat::Json | ExportFormat::Yaml => {
            println!("Dashboard exported to: {}", output.display());
        }
        ExportFormat::Csv => {
            println!("Dataset exported to: {}", output.display());
            println!("Note: CSV format exports the raw series only. Use JSON or YAML for chart configurations.");
        }
    }

    info!(
        path = %output.display(),
        format = ?format,
        city = %state.selected_city(),
        locale = %state.selected_locale(),
        "Export written"
    );

    Ok(())
}

/// Serialize an export in memory
pub fn render_export(
    state: &DashboardState,
    dataset: &Dataset,
    format: ExportFormat,
    pretty: bool,
) -> DashboardResult<Vec<u8>> {
    let mut buffer = Vec::new();
    match format {
        ExportFormat::Json => json::export_dashboard_json(state, dataset, &mut buffer, pretty)?,
        ExportFormat::Yaml => yaml::export_dashboard_yaml(state, dataset, &mut buffer)?,
        ExportFormat::Csv => csv::export_dataset_csv(dataset, &mut buffer)?,
    }
    Ok(buffer)
}
