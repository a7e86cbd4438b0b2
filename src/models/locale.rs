//! Display locale
//!
//! Locale only affects text. Numeric values are identical in every locale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display language of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (Canada), the fallback locale
    #[default]
    En,
    /// French (Canada)
    Fr,
}

impl Locale {
    /// All supported locales, in selector order
    pub const ALL: [Locale; 2] = [Self::En, Self::Fr];

    /// Locale code ("en" / "fr")
    pub const fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Label shown in the language selector
    pub const fn option_label(&self) -> &'static str {
        match self {
            Self::En => "English (CA)",
            Self::Fr => "Français (CA)",
        }
    }

    /// The other locale
    pub const fn toggled(&self) -> Self {
        match self {
            Self::En => Self::Fr,
            Self::Fr => Self::En,
        }
    }

    /// Parse a locale code, tolerant of case and region tags ("fr-CA", "EN_ca")
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" | "english" => Some(Self::En),
            "fr" | "french" | "français" => Some(Self::Fr),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("FR"), Some(Locale::Fr));
        assert_eq!(Locale::parse("fr-CA"), Some(Locale::Fr));
        assert_eq!(Locale::parse("en_CA"), Some(Locale::En));
        assert_eq!(Locale::parse("de"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Locale::En.toggled(), Locale::Fr);
        assert_eq!(Locale::Fr.toggled(), Locale::En);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::Fr).unwrap(), "\"fr\"");
    }
}
