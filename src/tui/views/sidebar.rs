//! Sidebar view
//!
//! Shows the language selector and the city list

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::display::report::truncate;
use crate::i18n;
use crate::models::{City, Locale};
use crate::tui::app::{App, FocusedControl};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_language(frame, app, layout.language);
    render_cities(frame, app, layout.cities);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Render the language selector
fn render_language(frame: &mut Frame, app: &App, area: Rect) {
    let selected = app.state().selected_locale();

    let block = Block::default()
        .title(format!(" {} ", i18n::language_label(selected)))
        .borders(Borders::ALL)
        .border_style(border_style(
            app.focused_control == FocusedControl::Language,
        ));

    let items: Vec<ListItem> = Locale::ALL
        .iter()
        .map(|locale| {
            let is_selected = *locale == selected;
            let style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let indicator = if is_selected { "▶" } else { " " };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", indicator), style),
                Span::styled(locale.option_label(), style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Render the city list
fn render_cities(frame: &mut Frame, app: &App, area: Rect) {
    let view = app.view();
    let name_width = area.width.saturating_sub(6) as usize;

    let block = Block::default()
        .title(format!(" {} ", view.select_city))
        .borders(Borders::ALL)
        .border_style(border_style(app.focused_control == FocusedControl::Cities));

    let items: Vec<ListItem> = City::ALL
        .iter()
        .map(|city| {
            ListItem::new(Span::styled(
                truncate(city.name(), name_width),
                Style::default().fg(Color::White),
            ))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(view.city.index()));

    frame.render_stateful_widget(list, area, &mut state);
}
