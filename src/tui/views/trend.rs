//! Trend chart view
//!
//! Draws a monthly series as a line chart. Datasets with `fill` set get a
//! dimmed area under the line.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{self, Axis, Block, Borders, Chart, GraphType, LegendPosition, Paragraph},
    Frame,
};

use crate::display::report::format_cad;
use crate::models::Locale;
use crate::projection::{BackgroundColor, ChartDataset, ChartPanel};
use crate::tui::layout::panel_sections;
use crate::tui::theme::{css_color, dimmed};

/// Horizontal resolution of the area fill, in steps per month
const FILL_STEPS: usize = 8;

/// Columns reserved per month label on the x axis
const LABEL_SPACING: usize = 10;

/// Render a trend panel
pub fn render(frame: &mut Frame, panel: &ChartPanel, locale: Locale, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", panel.title))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (description_area, chart_area) = panel_sections(inner);
    frame.render_widget(
        Paragraph::new(panel.description.as_str()).style(Style::default().fg(Color::Gray)),
        description_area,
    );

    let Some(series) = panel.chart.primary() else {
        return;
    };
    if chart_area.width < 16 || chart_area.height < 4 {
        return;
    }

    let points = line_points(&series.data);
    let (low, high) = y_bounds(&series.data);
    let line_color = series
        .border_color
        .as_deref()
        .and_then(css_color)
        .unwrap_or(Color::White);

    let fill = fill_points(series, low);
    let fill_color = match &series.background_color {
        BackgroundColor::Single(css) => css_color(css).map(dimmed),
        BackgroundColor::PerBar(_) => None,
    }
    .unwrap_or(Color::DarkGray);

    let mut datasets = Vec::new();
    if !fill.is_empty() {
        datasets.push(
            widgets::Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Bar)
                .style(Style::default().fg(fill_color))
                .data(&fill),
        );
    }
    datasets.push(
        widgets::Dataset::default()
            .name(series.label.clone())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(line_color))
            .data(&points),
    );

    let x_labels: Vec<Span> = x_axis_labels(&panel.chart.labels, chart_area.width as usize)
        .into_iter()
        .map(Span::raw)
        .collect();
    let y_labels = vec![
        Span::raw(format_cad(low, locale)),
        Span::raw(format_cad(high, locale)),
    ];

    let chart = Chart::new(datasets)
        .legend_position(Some(LegendPosition::TopLeft))
        .hidden_legend_constraints((Constraint::Ratio(1, 1), Constraint::Ratio(1, 2)))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, series.data.len().saturating_sub(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([low, high])
                .labels(y_labels),
        );

    frame.render_widget(chart, chart_area);
}

/// One point per month
fn line_points(data: &[f64]) -> Vec<(f64, f64)> {
    data.iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect()
}

/// Densely interpolated points under the line, empty unless fill is on
fn fill_points(series: &ChartDataset, floor: f64) -> Vec<(f64, f64)> {
    if series.fill != Some(true) || series.data.len() < 2 {
        return Vec::new();
    }

    let mut points = Vec::new();
    for pair in series.data.windows(2).enumerate() {
        let (i, window) = pair;
        for step in 0..FILL_STEPS {
            let t = step as f64 / FILL_STEPS as f64;
            let y = window[0] + (window[1] - window[0]) * t;
            points.push((i as f64 + t, y.max(floor)));
        }
    }
    if let Some(last) = series.data.last() {
        points.push(((series.data.len() - 1) as f64, *last));
    }
    points
}

/// Month labels that fit in `width` columns, spread evenly from first to last
fn x_axis_labels(labels: &[String], width: usize) -> Vec<String> {
    if labels.len() <= 2 {
        return labels.to_vec();
    }
    let count = (width / LABEL_SPACING).clamp(2, labels.len());
    let last = labels.len() - 1;
    (0..count)
        .map(|i| {
            let index = (i * last + (count - 1) / 2) / (count - 1);
            labels[index].clone()
        })
        .collect()
}

/// Y axis bounds with some headroom, rounded to whole dollars
fn y_bounds(data: &[f64]) -> (f64, f64) {
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((max - min) * 0.1).max(1.0);
    ((min - pad).max(0.0).floor(), (max + pad).ceil())
}
