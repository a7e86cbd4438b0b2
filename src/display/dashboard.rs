//! Dashboard display formatting
//!
//! Renders a projected dashboard as plain text for `costdash show`.

use super::report::{
    double_separator, format_bar, format_cad, format_header, left_align, separator,
};
use crate::models::{City, Locale};
use crate::projection::{BackgroundColor, ChartPanel, DashboardView, HIGHLIGHT_COLOR};

const WIDTH: usize = 72;
const BAR_WIDTH: usize = 30;

/// Format the whole dashboard as a text report
pub fn format_dashboard(view: &DashboardView) -> String {
    let mut output = String::new();

    output.push_str(&double_separator(WIDTH));
    output.push('\n');
    output.push_str(&format_header(&view.title, WIDTH));
    output.push('\n');
    output.push_str(&double_separator(WIDTH));
    output.push('\n');
    output.push_str(&view.footer_note);
    output.push_str("\n\n");
    output.push_str(&format!("{} {}\n", view.select_city, view.city));
    output.push_str(&format!("{}\n\n", view.locale.option_label()));

    output.push_str(&format_trend(&view.rent, view.locale));
    output.push('\n');
    output.push_str(&format_trend(&view.utilities, view.locale));
    output.push('\n');
    output.push_str(&format_comparison(&view.grocery, view.locale));

    output
}

fn panel_heading(panel: &ChartPanel) -> String {
    format!(
        "{}\n{}\n{}\n",
        panel.title,
        separator(WIDTH),
        panel.description
    )
}

/// Format a monthly trend panel, one row per month
fn format_trend(panel: &ChartPanel, locale: Locale) -> String {
    let mut output = panel_heading(panel);

    let Some(dataset) = panel.chart.primary() else {
        return output;
    };
    output.push_str(&format!("{}\n", dataset.label));

    let max = dataset.data.iter().copied().fold(0.0, f64::max);
    for (month, value) in panel.chart.labels.iter().zip(dataset.data.iter()) {
        output.push_str(&format!(
            "  {}  {:>12}  {}\n",
            month,
            format_cad(*value, locale),
            format_bar(*value, max, BAR_WIDTH)
        ));
    }

    output
}

/// Format the per-city comparison panel, marking the highlighted bar
fn format_comparison(panel: &ChartPanel, locale: Locale) -> String {
    let mut output = panel_heading(panel);

    let Some(dataset) = panel.chart.primary() else {
        return output;
    };
    output.push_str(&format!("{}\n", dataset.label));

    let highlighted: Vec<bool> = match &dataset.background_color {
        BackgroundColor::PerBar(colors) => {
            colors.iter().map(|c| c == HIGHLIGHT_COLOR.css).collect()
        }
        BackgroundColor::Single(_) => vec![false; dataset.data.len()],
    };

    let name_width = panel
        .chart
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(4);
    let max = dataset.data.iter().copied().fold(0.0, f64::max);

    for (i, (name, value)) in panel.chart.labels.iter().zip(dataset.data.iter()).enumerate() {
        let marker = if highlighted.get(i).copied().unwrap_or(false) {
            "▶"
        } else {
            " "
        };
        output.push_str(&format!(
            "{} {}  {:>12}  {}\n",
            marker,
            left_align(name, name_width),
            format_cad(*value, locale),
            format_bar(*value, max, BAR_WIDTH)
        ));
    }

    output
}

/// Format the list of available cities, one per line
pub fn format_city_list() -> String {
    City::ALL
        .iter()
        .map(|c| format!("{}\n", c.name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::state::DashboardState;

    #[test]
    fn test_report_contains_localized_text() {
        let dataset = Dataset::generate_seeded(5);
        let state = DashboardState::new(City::Calgary, Locale::Fr);
        let report = format_dashboard(&DashboardView::project(&state, &dataset));

        assert!(report.contains("Tableau du Coût de la Vie"));
        assert!(report.contains("Loyer à Calgary (CAD/mois)"));
        assert!(report.contains("Services à Calgary (CAD/mois)"));
        assert!(report.contains("Coût de l’épicerie (CAD/mois)"));
        assert!(report.contains("2024-07"));
        assert!(report.contains("2025-06"));
    }

    #[test]
    fn test_report_marks_selected_city_only() {
        let dataset = Dataset::generate_seeded(5);
        let state = DashboardState::new(City::Regina, Locale::En);
        let report = format_dashboard(&DashboardView::project(&state, &dataset));

        let marked: Vec<_> = report.lines().filter(|l| l.starts_with('▶')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("Regina"));
    }

    #[test]
    fn test_city_list() {
        let list = format_city_list();
        assert_eq!(list.lines().count(), 15);
        assert_eq!(list.lines().next(), Some("Toronto"));
    }
}
