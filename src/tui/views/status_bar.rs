//! Status bar view
//!
//! Shows the current selection, any status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::Locale;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.state();

    let mut spans = vec![
        Span::styled(" ", Style::default()),
        Span::styled(
            state.selected_city().name(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(
            state.selected_locale().code(),
            Style::default().fg(Color::Cyan),
        ),
    ];

    if let Some(seed) = app.dataset.seed() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("seed {}", seed),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match state.selected_locale() {
        Locale::En => " q:Quit  ?:Help  L:Language ",
        Locale::Fr => " q:Quitter  ?:Aide  L:Langue ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
