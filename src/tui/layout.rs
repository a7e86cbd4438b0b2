//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: header, sidebar, chart panels,
//! status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::models::City;

/// Rows the comparison panel needs to show every city: borders, the
/// description line and one row per bar
pub const COMPARISON_HEIGHT: u16 = City::COUNT as u16 + 3;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title and disclaimer
    pub header: Rect,
    /// Language selector and city list
    pub sidebar: Rect,
    /// Rent trend chart
    pub rent: Rect,
    /// Utilities trend chart
    pub utilities: Rect,
    /// Grocery comparison chart
    pub grocery: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(10),   // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(28), // Sidebar (fixed width)
                Constraint::Min(40),    // Charts
            ])
            .split(vertical[1]);

        let charts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(COMPARISON_HEIGHT)])
            .split(body[1]);

        let trends = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(charts[0]);

        Self {
            header: vertical[0],
            sidebar: body[0],
            rent: trends[0],
            utilities: trends[1],
            grocery: charts[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the sidebar
pub struct SidebarLayout {
    /// Language selector
    pub language: Rect,
    /// City list
    pub cities: Rect,
}

impl SidebarLayout {
    /// Calculate sidebar layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Two locales plus borders
                Constraint::Min(3),    // Cities
            ])
            .split(area);

        Self {
            language: chunks[0],
            cities: chunks[1],
        }
    }
}

/// Split a chart panel's inner area into a description line and the chart
pub fn panel_sections(inner: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);
    (chunks[0], chunks[1])
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_fit_area() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = AppLayout::new(area);

        assert_eq!(layout.header.height, 4);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.sidebar.width, 28);
        assert_eq!(layout.rent.y, layout.utilities.y);
        assert!(layout.grocery.y > layout.rent.y);
        for rect in [layout.rent, layout.utilities, layout.grocery] {
            assert!(rect.x >= 28);
            assert!(rect.right() <= area.right());
        }
    }

    #[test]
    fn test_comparison_fits_every_city_when_room_allows() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40));
        assert!(layout.grocery.height >= COMPARISON_HEIGHT);

        // Small terminals keep the trend charts usable
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert!(layout.rent.height >= 8);
        assert!(layout.grocery.height < COMPARISON_HEIGHT);
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 70, area);
        assert!(popup.x > 0 && popup.y > 0);
        assert!(popup.right() < area.right());
        assert!(popup.bottom() < area.bottom());
    }
}
