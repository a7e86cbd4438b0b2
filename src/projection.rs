//! View projection
//!
//! Pure functions from (selection, dataset) to chart configuration records.
//! The records use Chart.js field names (`labels`, `datasets`, `borderColor`,
//! `backgroundColor`, `fill`) so an export can be handed to a Chart.js front
//! end as-is; the TUI renders the same records with ratatui widgets.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::i18n;
use crate::models::{City, Locale, MonthlySeries, MONTH_LABELS};
use crate::state::DashboardState;

/// A fixed chart color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartColor {
    /// CSS color string handed to the chart library
    pub css: &'static str,
}

/// Line color and translucent area fill for a trend chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesColors {
    pub border: ChartColor,
    pub background: ChartColor,
}

pub const RENT_COLORS: SeriesColors = SeriesColors {
    border: ChartColor { css: "#3B82F6" },
    background: ChartColor { css: "rgba(59, 130, 246, 0.5)" },
};

pub const UTILITIES_COLORS: SeriesColors = SeriesColors {
    border: ChartColor { css: "#F97316" },
    background: ChartColor { css: "rgba(249, 115, 22, 0.5)" },
};

/// Bar color of the selected city in the grocery chart
pub const HIGHLIGHT_COLOR: ChartColor = ChartColor { css: "#10B981" };

/// Bar color of every other city in the grocery chart
pub const NEUTRAL_COLOR: ChartColor = ChartColor { css: "#E5E7EB" };

/// `backgroundColor` is either one color or one color per bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BackgroundColor {
    Single(String),
    PerBar(Vec<String>),
}

/// One dataset of a chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    pub background_color: BackgroundColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

/// Chart configuration consumed by the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartConfig {
    /// The single dataset every dashboard chart carries
    pub fn primary(&self) -> Option<&ChartDataset> {
        self.datasets.first()
    }
}

fn trend_chart(label: String, series: &MonthlySeries, colors: SeriesColors) -> ChartConfig {
    ChartConfig {
        labels: MONTH_LABELS.iter().map(|m| m.to_string()).collect(),
        datasets: vec![ChartDataset {
            label,
            data: series.values().to_vec(),
            border_color: Some(colors.border.css.to_string()),
            background_color: BackgroundColor::Single(colors.background.css.to_string()),
            fill: Some(true),
        }],
    }
}

/// Monthly rent trend for the selected city
pub fn rent_chart(state: &DashboardState, dataset: &Dataset) -> ChartConfig {
    let city = state.selected_city();
    trend_chart(
        i18n::rent_label(state.selected_locale(), city),
        dataset.rent(city),
        RENT_COLORS,
    )
}

/// Monthly utilities trend for the selected city
pub fn utilities_chart(state: &DashboardState, dataset: &Dataset) -> ChartConfig {
    let city = state.selected_city();
    trend_chart(
        i18n::utilities_label(state.selected_locale(), city),
        dataset.utilities(city),
        UTILITIES_COLORS,
    )
}

/// Mean monthly grocery cost of every city, in declaration order
pub fn grocery_means(dataset: &Dataset) -> [f64; City::COUNT] {
    City::ALL.map(|city| dataset.groceries(city).mean())
}

/// Bar color of a city given the current selection
pub fn bar_color(city: City, selected: City) -> ChartColor {
    if city == selected {
        HIGHLIGHT_COLOR
    } else {
        NEUTRAL_COLOR
    }
}

/// Average grocery cost across all cities, selected city highlighted
pub fn grocery_chart(state: &DashboardState, dataset: &Dataset) -> ChartConfig {
    let selected = state.selected_city();
    ChartConfig {
        labels: City::ALL.iter().map(|c| c.name().to_string()).collect(),
        datasets: vec![ChartDataset {
            label: i18n::strings(state.selected_locale())
                .grocery_label
                .to_string(),
            data: grocery_means(dataset).to_vec(),
            border_color: None,
            background_color: BackgroundColor::PerBar(
                City::ALL
                    .iter()
                    .map(|c| bar_color(*c, selected).css.to_string())
                    .collect(),
            ),
            fill: None,
        }],
    }
}

/// A chart with its localized heading and description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPanel {
    pub title: String,
    pub description: String,
    pub chart: ChartConfig,
}

/// Everything a renderer needs for one (city, locale) selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub city: City,
    pub locale: Locale,
    pub title: String,
    pub footer_note: String,
    pub select_city: String,
    pub rent: ChartPanel,
    pub utilities: ChartPanel,
    pub grocery: ChartPanel,
}

impl DashboardView {
    /// Project the current selection over the dataset
    pub fn project(state: &DashboardState, dataset: &Dataset) -> Self {
        let t = i18n::strings(state.selected_locale());
        Self {
            city: state.selected_city(),
            locale: state.selected_locale(),
            title: t.title.to_string(),
            footer_note: t.footer_note.to_string(),
            select_city: t.select_city.to_string(),
            rent: ChartPanel {
                title: t.rent_title.to_string(),
                description: t.rent_desc.to_string(),
                chart: rent_chart(state, dataset),
            },
            utilities: ChartPanel {
                title: t.utilities_title.to_string(),
                description: t.utilities_desc.to_string(),
                chart: utilities_chart(state, dataset),
            },
            grocery: ChartPanel {
                title: t.grocery_title.to_string(),
                description: t.grocery_desc.to_string(),
                chart: grocery_chart(state, dataset),
            },
        }
    }

    /// Every displayed text of the view, in reading order
    pub fn texts(&self) -> Vec<&str> {
        let mut texts = vec![
            self.title.as_str(),
            self.footer_note.as_str(),
            self.select_city.as_str(),
        ];
        for panel in [&self.rent, &self.utilities, &self.grocery] {
            texts.push(&panel.title);
            texts.push(&panel.description);
            texts.extend(panel.chart.datasets.iter().map(|d| d.label.as_str()));
        }
        texts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostCategory, MONTHS};

    fn sample_dataset() -> Dataset {
        Dataset::generate_seeded(2024)
    }

    fn bar_colors(chart: &ChartConfig) -> Vec<String> {
        match &chart.datasets[0].background_color {
            BackgroundColor::PerBar(colors) => colors.clone(),
            BackgroundColor::Single(_) => panic!("grocery chart should color each bar"),
        }
    }

    #[test]
    fn test_calgary_french_scenario() {
        let dataset = sample_dataset();
        let state = DashboardState::new(City::Calgary, Locale::Fr);

        let rent = rent_chart(&state, &dataset);
        assert_eq!(rent.datasets[0].label, "Loyer à Calgary (CAD/mois)");
        assert_eq!(rent.labels, MONTH_LABELS.to_vec());
        assert_eq!(rent.labels.first().map(String::as_str), Some("2024-07"));
        assert_eq!(rent.labels.last().map(String::as_str), Some("2025-06"));

        let grocery = grocery_chart(&state, &dataset);
        let colors = bar_colors(&grocery);
        assert_eq!(colors.len(), 15);
        for (city, color) in City::ALL.iter().zip(colors.iter()) {
            if *city == City::Calgary {
                assert_eq!(color, "#10B981");
            } else {
                assert_eq!(color, "#E5E7EB");
            }
        }
        assert_eq!(colors.iter().filter(|c| *c == "#E5E7EB").count(), 14);
    }

    #[test]
    fn test_trend_charts_follow_city() {
        let dataset = sample_dataset();
        let mut state = DashboardState::new(City::Toronto, Locale::En);

        let before_rent = rent_chart(&state, &dataset);
        let before_grocery = grocery_chart(&state, &dataset);

        state.set_city(City::Victoria);
        let rent = rent_chart(&state, &dataset);
        let utilities = utilities_chart(&state, &dataset);
        let grocery = grocery_chart(&state, &dataset);

        assert_ne!(before_rent, rent);
        assert_eq!(rent.datasets[0].label, "Rent in Victoria (CAD/month)");
        assert_eq!(rent.datasets[0].data, dataset.rent(City::Victoria).values());
        assert_eq!(
            utilities.datasets[0].label,
            "Utilities in Victoria (CAD/month)"
        );
        assert_eq!(
            utilities.datasets[0].data,
            dataset.utilities(City::Victoria).values()
        );

        assert_eq!(grocery.labels, before_grocery.labels);
        assert_eq!(grocery.datasets[0].data, before_grocery.datasets[0].data);
        let highlighted: Vec<_> = bar_colors(&grocery)
            .iter()
            .enumerate()
            .filter(|(_, c)| *c == HIGHLIGHT_COLOR.css)
            .map(|(i, _)| City::ALL[i])
            .collect();
        assert_eq!(highlighted, vec![City::Victoria]);
    }

    #[test]
    fn test_grocery_means_match_independent_average() {
        let dataset = sample_dataset();
        let means = grocery_means(&dataset);
        for city in City::ALL {
            let values = dataset.series(CostCategory::Groceries, city).values();
            let mut sum = 0.0;
            for v in values {
                sum += v;
            }
            let expected = sum / MONTHS as f64;
            assert!((means[city.index()] - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_grocery_labels_are_all_cities() {
        let dataset = sample_dataset();
        let chart = grocery_chart(&DashboardState::default(), &dataset);
        let names: Vec<_> = City::ALL.iter().map(|c| c.name().to_string()).collect();
        assert_eq!(chart.labels, names);
    }

    #[test]
    fn test_locale_switch_changes_text_not_numbers() {
        let dataset = sample_dataset();
        let mut state = DashboardState::new(City::Ottawa, Locale::En);
        let en = DashboardView::project(&state, &dataset);
        state.set_locale(Locale::Fr);
        let fr = DashboardView::project(&state, &dataset);

        let en_texts = en.texts();
        let fr_texts = fr.texts();
        assert_eq!(en_texts.len(), fr_texts.len());
        for (a, b) in en_texts.iter().zip(fr_texts.iter()) {
            assert_ne!(a, b);
        }

        for (a, b) in [
            (&en.rent, &fr.rent),
            (&en.utilities, &fr.utilities),
            (&en.grocery, &fr.grocery),
        ] {
            assert_eq!(a.chart.labels, b.chart.labels);
            assert_eq!(a.chart.datasets[0].data, b.chart.datasets[0].data);
            assert_eq!(
                a.chart.datasets[0].background_color,
                b.chart.datasets[0].background_color
            );
        }
    }

    #[test]
    fn test_round_trip_selection_is_identical() {
        let dataset = sample_dataset();
        let mut state = DashboardState::new(City::Montreal, Locale::Fr);
        let first = serde_json::to_string(&DashboardView::project(&state, &dataset)).unwrap();

        state.set_city(City::Winnipeg);
        let other = serde_json::to_string(&DashboardView::project(&state, &dataset)).unwrap();
        state.set_city(City::Montreal);
        let again = serde_json::to_string(&DashboardView::project(&state, &dataset)).unwrap();

        assert_ne!(first, other);
        assert_eq!(first, again);
    }

    #[test]
    fn test_chart_js_field_names() {
        let dataset = sample_dataset();
        let state = DashboardState::default();

        let rent = serde_json::to_value(rent_chart(&state, &dataset)).unwrap();
        let ds = &rent["datasets"][0];
        assert_eq!(ds["borderColor"], "#3B82F6");
        assert_eq!(ds["backgroundColor"], "rgba(59, 130, 246, 0.5)");
        assert_eq!(ds["fill"], true);
        assert_eq!(ds["data"].as_array().map(Vec::len), Some(12));

        let utilities = serde_json::to_value(utilities_chart(&state, &dataset)).unwrap();
        assert_eq!(utilities["datasets"][0]["borderColor"], "#F97316");
        assert_eq!(
            utilities["datasets"][0]["backgroundColor"],
            "rgba(249, 115, 22, 0.5)"
        );

        let grocery = serde_json::to_value(grocery_chart(&state, &dataset)).unwrap();
        let ds = &grocery["datasets"][0];
        assert!(ds["backgroundColor"].is_array());
        assert!(ds.get("borderColor").is_none());
        assert!(ds.get("fill").is_none());
    }

    #[test]
    fn test_projection_does_not_touch_dataset() {
        let dataset = sample_dataset();
        let copy = dataset.clone();
        let state = DashboardState::new(City::Regina, Locale::Fr);
        let _ = DashboardView::project(&state, &dataset);
        assert_eq!(dataset, copy);
    }
}
