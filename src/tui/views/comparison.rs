//! City comparison view
//!
//! Draws the per-city grocery averages as horizontal bars, each bar in the
//! color the chart configuration assigns to it. When the panel has fewer
//! rows than cities, a window of bars around the selected city is shown.

use std::ops::Range;

use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::display::report::{format_cad, left_align};
use crate::models::{City, Locale};
use crate::projection::{BackgroundColor, ChartPanel};
use crate::tui::layout::panel_sections;
use crate::tui::theme::css_color;

/// Render the comparison panel
pub fn render(frame: &mut Frame, panel: &ChartPanel, locale: Locale, selected: City, area: Rect) {
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

    let colors: Vec<Color> = match &series.background_color {
        BackgroundColor::PerBar(colors) => colors
            .iter()
            .map(|c| css_color(c).unwrap_or(Color::Gray))
            .collect(),
        BackgroundColor::Single(c) => {
            vec![css_color(c).unwrap_or(Color::Gray); series.data.len()]
        }
    };

    let label_width = panel
        .chart
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    // Room for the labels plus a few cells of bar
    if (chart_area.width as usize) < label_width + 8 || chart_area.height == 0 {
        return;
    }

    let scale = |value: f64| value.round().max(0.0) as u64;
    let max = series.data.iter().copied().map(scale).max().unwrap_or(0);
    let window = visible_window(
        series.data.len(),
        selected.index(),
        chart_area.height as usize,
    );

    let bars: Vec<Bar> = panel
        .chart
        .labels
        .iter()
        .zip(series.data.iter())
        .zip(colors.iter())
        .skip(window.start)
        .take(window.len())
        .map(|((name, value), color)| {
            Bar::default()
                .label(Line::from(left_align(name, label_width)))
                .value(scale(*value))
                .text_value(format_cad(*value, locale))
                .style(Style::default().fg(*color))
                .value_style(Style::default().fg(Color::Black).bg(*color))
        })
        .collect();

    let chart = BarChart::default()
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .max(max)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, chart_area);
}

/// Indices of the bars to draw in `rows` rows, keeping `selected` in view
fn visible_window(total: usize, selected: usize, rows: usize) -> Range<usize> {
    if rows >= total {
        return 0..total;
    }
    let start = selected
        .saturating_sub(rows / 2)
        .min(total - rows);
    start..start + rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_shows_everything_when_it_fits() {
        assert_eq!(visible_window(15, 14, 15), 0..15);
        assert_eq!(visible_window(15, 0, 40), 0..15);
    }

    #[test]
    fn test_window_keeps_selection_visible() {
        for rows in 1..15 {
            for selected in 0..15 {
                let window = visible_window(15, selected, rows);
                assert_eq!(window.len(), rows);
                assert!(window.contains(&selected), "{} rows, city {}", rows, selected);
                assert!(window.end <= 15);
            }
        }
        assert_eq!(visible_window(15, 14, 6), 9..15);
        assert_eq!(visible_window(15, 0, 6), 0..6);
    }
}
