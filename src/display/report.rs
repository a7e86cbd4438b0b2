//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the text report and the TUI.

use crate::models::Locale;

/// Format a CAD amount for a locale: "$1234.56" in English, "1234,56 $" in French
pub fn format_cad(amount: f64, locale: Locale) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let digits = format!("{:.2}", amount.abs());
    match locale {
        Locale::En => format!("{}${}", sign, digits),
        Locale::Fr => format!("{}{} $", sign, digits.replace('.', ",")),
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters, with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len == 0 {
        String::new()
    } else {
        let kept: String = s.chars().take(max_len - 1).collect();
        format!("{}…", kept)
    }
}

/// Left-align text in a field of given width, counting characters
pub fn left_align(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cad() {
        assert_eq!(format_cad(1234.5, Locale::En), "$1234.50");
        assert_eq!(format_cad(1234.5, Locale::Fr), "1234,50 $");
        assert_eq!(format_cad(-3.0, Locale::En), "-$3.00");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Charlottetown", 6), "Charl…");
        assert_eq!(truncate("Regina", 6), "Regina");
        assert_eq!(truncate("Montréal", 8), "Montréal");
    }

    #[test]
    fn test_alignment_counts_chars() {
        assert_eq!(left_align("Épi", 5), "Épi  ");
        assert_eq!(format_header("abc", 7), "  abc");
    }
}
