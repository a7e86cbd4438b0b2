//! JSON Export functionality
//!
//! Exports the projected dashboard (all three chart configurations plus the
//! localized texts) with schema versioning.

use crate::dataset::Dataset;
use crate::error::{DashboardError, DashboardResult};
use crate::projection::DashboardView;
use crate::state::DashboardState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Dashboard export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Seed the synthetic dataset was generated from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_seed: Option<u64>,

    /// The projected dashboard
    pub dashboard: DashboardView,
}

impl DashboardExport {
    /// Project the selection and wrap it for export
    pub fn new(state: &DashboardState, dataset: &Dataset) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            dataset_seed: dataset.seed(),
            dashboard: DashboardView::project(state, dataset),
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let panels = [
            ("rent", &self.dashboard.rent),
            ("utilities", &self.dashboard.utilities),
            ("grocery", &self.dashboard.grocery),
        ];
        for (name, panel) in panels {
            for dataset in &panel.chart.datasets {
                if dataset.data.len() != panel.chart.labels.len() {
                    return Err(format!(
                        "{} chart has {} labels but {} values",
                        name,
                        panel.chart.labels.len(),
                        dataset.data.len()
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Export the projected dashboard to JSON
pub fn export_dashboard_json<W: Write>(
    state: &DashboardState,
    dataset: &Dataset,
    writer: &mut W,
    pretty: bool,
) -> DashboardResult<()> {
    let export = DashboardExport::new(state, dataset);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)?;
    } else {
        serde_json::to_writer(&mut *writer, &export)?;
    }
    writeln!(writer).map_err(|e| DashboardError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export
pub fn import_from_json(json_str: &str) -> DashboardResult<DashboardExport> {
    let export: DashboardExport = serde_json::from_str(json_str)?;
    export.validate().map_err(DashboardError::Validation)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, Locale};

    #[test]
    fn test_export_and_read_back() {
        let dataset = Dataset::generate_seeded(3);
        let state = DashboardState::new(City::Halifax, Locale::Fr);

        let mut buffer = Vec::new();
        export_dashboard_json(&state, &dataset, &mut buffer, true).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let export = import_from_json(&text).unwrap();
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.dataset_seed, Some(3));
        assert_eq!(export.dashboard, DashboardView::project(&state, &dataset));
    }

    #[test]
    fn test_chart_js_shape_in_output() {
        let dataset = Dataset::generate_seeded(3);
        let state = DashboardState::default();

        let mut buffer = Vec::new();
        export_dashboard_json(&state, &dataset, &mut buffer, false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        let rent = &value["dashboard"]["rent"]["chart"];
        assert_eq!(rent["labels"].as_array().map(Vec::len), Some(12));
        assert_eq!(rent["datasets"][0]["fill"], true);
        assert_eq!(value["dashboard"]["city"], "Toronto");
        assert_eq!(value["dashboard"]["locale"], "en");
    }

    #[test]
    fn test_validate_rejects_other_schema() {
        let dataset = Dataset::generate_seeded(3);
        let mut export = DashboardExport::new(&DashboardState::default(), &dataset);
        export.schema_version = "0.1.0".into();
        assert!(export.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_length_mismatch() {
        let dataset = Dataset::generate_seeded(3);
        let mut export = DashboardExport::new(&DashboardState::default(), &dataset);
        export.dashboard.grocery.chart.datasets[0].data.pop();
        let err = export.validate().unwrap_err();
        assert!(err.contains("grocery"));
    }
}
