//! YAML Export functionality
//!
//! Exports the projected dashboard to YAML for human reading.

use crate::dataset::Dataset;
use crate::error::{DashboardError, DashboardResult};
use crate::export::json::DashboardExport;
use crate::state::DashboardState;
use std::io::Write;

/// Export the projected dashboard to YAML
pub fn export_dashboard_yaml<W: Write>(
    state: &DashboardState,
    dataset: &Dataset,
    writer: &mut W,
) -> DashboardResult<()> {
    let export = DashboardExport::new(state, dataset);

    writeln!(writer, "# Cost of Living Dashboard Export")
        .map_err(|e| DashboardError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| DashboardError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| DashboardError::Export(e.to_string()))?;
    writeln!(writer, "# All values are synthetic (CAD).")
        .map_err(|e| DashboardError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| DashboardError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)?;

    Ok(())
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> DashboardResult<DashboardExport> {
    let export: DashboardExport = serde_yaml::from_str(yaml_str)?;
    export.validate().map_err(DashboardError::Validation)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, Locale};
    use crate::projection::DashboardView;

    #[test]
    fn test_yaml_export_reads_back() {
        let dataset = Dataset::generate_seeded(8);
        let state = DashboardState::new(City::Calgary, Locale::Fr);

        let mut buffer = Vec::new();
        export_dashboard_yaml(&state, &dataset, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Cost of Living Dashboard Export"));
        assert!(text.contains("Calgary"));

        let export = import_from_yaml(&text).unwrap();
        assert_eq!(export.dashboard, DashboardView::project(&state, &dataset));
    }
}
