//! Help dialog
//!
//! Lists the keyboard shortcuts in the current dashboard language

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::Locale;
use crate::tui::app::App;
use crate::tui::keybindings::{bindings_for, KeyContext};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());
    let locale = app.state().selected_locale();

    frame.render_widget(Clear, area);

    let title = match locale {
        Locale::En => " Help ",
        Locale::Fr => " Aide ",
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(locale))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Help lines grouped by context
fn help_lines(locale: Locale) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for context in [KeyContext::Global, KeyContext::Cities, KeyContext::Language] {
        lines.push(Line::from(vec![Span::styled(
            context.heading(locale),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]));
        lines.push(Line::from(""));
        for binding in bindings_for(context) {
            lines.push(key_line(binding.keys, binding.description(locale)));
        }
        lines.push(Line::from(""));
    }

    let close = match locale {
        Locale::En => "Press any key to close",
        Locale::Fr => "Appuyez sur une touche pour fermer",
    };
    lines.push(Line::from(vec![Span::styled(
        close,
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description, Style::default().fg(Color::White)),
    ])
}
