//! Terminal colors for chart configurations
//!
//! Chart records carry CSS color strings. The TUI turns them back into
//! terminal colors here so it renders exactly what an export would show.

use ratatui::style::Color;

/// Parse a CSS color ("#RRGGBB" or "rgb(a)(r, g, b[, a])") into a terminal color
pub fn css_color(css: &str) -> Option<Color> {
    let css = css.trim();

    if let Some(hex) = css.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
    }

    let inner = css
        .strip_prefix("rgba(")
        .or_else(|| css.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let r = parts.next()?.parse().ok()?;
    let g = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Dim a terminal color, used for area fills under trend lines
pub fn dimmed(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(r / 2, g / 2, b / 2),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{HIGHLIGHT_COLOR, NEUTRAL_COLOR, RENT_COLORS, UTILITIES_COLORS};

    #[test]
    fn test_parse_hex_and_rgba() {
        assert_eq!(css_color("#3B82F6"), Some(Color::Rgb(59, 130, 246)));
        assert_eq!(
            css_color("rgba(249, 115, 22, 0.5)"),
            Some(Color::Rgb(249, 115, 22))
        );
        assert_eq!(css_color("rgb(1,2,3)"), Some(Color::Rgb(1, 2, 3)));
        assert_eq!(css_color("blue"), None);
        assert_eq!(css_color("#12345"), None);
    }

    #[test]
    fn test_chart_constants_parse() {
        assert_eq!(css_color(RENT_COLORS.border.css), Some(Color::Rgb(59, 130, 246)));
        assert_eq!(
            css_color(RENT_COLORS.background.css),
            Some(Color::Rgb(59, 130, 246))
        );
        assert_eq!(
            css_color(UTILITIES_COLORS.border.css),
            css_color(UTILITIES_COLORS.background.css)
        );
        assert_eq!(css_color(HIGHLIGHT_COLOR.css), Some(Color::Rgb(16, 185, 129)));
        assert_eq!(css_color(NEUTRAL_COLOR.css), Some(Color::Rgb(229, 231, 235)));
    }

    #[test]
    fn test_dimmed() {
        assert_eq!(dimmed(Color::Rgb(100, 50, 10)), Color::Rgb(50, 25, 5));
        assert_eq!(dimmed(Color::Red), Color::Red);
    }
}
