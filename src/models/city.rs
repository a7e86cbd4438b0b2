//! City model
//!
//! The dashboard covers a closed set of fifteen Canadian cities. Declaration
//! order is significant: it is the order of the grocery chart categories and
//! of the city list, and the first city is the default selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A city covered by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum City {
    Toronto,
    Montreal,
    Vancouver,
    Calgary,
    Ottawa,
    Edmonton,
    Winnipeg,
    #[serde(rename = "Quebec City")]
    QuebecCity,
    Halifax,
    Saskatoon,
    Victoria,
    #[serde(rename = "St. John's")]
    StJohns,
    Regina,
    Charlottetown,
    Whitehorse,
}

impl City {
    /// Number of cities covered
    pub const COUNT: usize = 15;

    /// All cities in declaration order
    pub const ALL: [City; Self::COUNT] = [
        Self::Toronto,
        Self::Montreal,
        Self::Vancouver,
        Self::Calgary,
        Self::Ottawa,
        Self::Edmonton,
        Self::Winnipeg,
        Self::QuebecCity,
        Self::Halifax,
        Self::Saskatoon,
        Self::Victoria,
        Self::StJohns,
        Self::Regina,
        Self::Charlottetown,
        Self::Whitehorse,
    ];

    /// The first declared city, used as the initial selection
    pub const fn first() -> Self {
        Self::Toronto
    }

    /// Display name, exactly as shown in charts and selectors
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Toronto => "Toronto",
            Self::Montreal => "Montreal",
            Self::Vancouver => "Vancouver",
            Self::Calgary => "Calgary",
            Self::Ottawa => "Ottawa",
            Self::Edmonton => "Edmonton",
            Self::Winnipeg => "Winnipeg",
            Self::QuebecCity => "Quebec City",
            Self::Halifax => "Halifax",
            Self::Saskatoon => "Saskatoon",
            Self::Victoria => "Victoria",
            Self::StJohns => "St. John's",
            Self::Regina => "Regina",
            Self::Charlottetown => "Charlottetown",
            Self::Whitehorse => "Whitehorse",
        }
    }

    /// Position in declaration order
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or_default()
    }

    /// Next city in declaration order, wrapping after the last one
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Previous city in declaration order, wrapping before the first one
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }

    /// Parse a city from user input
    ///
    /// Matching ignores case, whitespace and punctuation, so "quebec city",
    /// "QuebecCity" and "st johns" are all accepted. French spellings of
    /// Montreal and Quebec City are accepted too.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = normalize(s);
        if wanted.is_empty() {
            return None;
        }

        match wanted.as_str() {
            "montréal" => return Some(Self::Montreal),
            "québec" | "québeccity" | "quebec" | "villedequébec" => {
                return Some(Self::QuebecCity)
            }
            _ => {}
        }

        Self::ALL
            .iter()
            .copied()
            .find(|city| normalize(city.name()) == wanted)
    }
}

impl Default for City {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fifteen_distinct_cities() {
        let names: HashSet<_> = City::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), City::COUNT);
        assert_eq!(City::ALL[0], City::first());
    }

    #[test]
    fn test_declaration_order() {
        let names: Vec<_> = City::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "Toronto",
                "Montreal",
                "Vancouver",
                "Calgary",
                "Ottawa",
                "Edmonton",
                "Winnipeg",
                "Quebec City",
                "Halifax",
                "Saskatoon",
                "Victoria",
                "St. John's",
                "Regina",
                "Charlottetown",
                "Whitehorse",
            ]
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(City::parse("Calgary"), Some(City::Calgary));
        assert_eq!(City::parse("  calgary "), Some(City::Calgary));
        assert_eq!(City::parse("quebec city"), Some(City::QuebecCity));
        assert_eq!(City::parse("Québec"), Some(City::QuebecCity));
        assert_eq!(City::parse("Montréal"), Some(City::Montreal));
        assert_eq!(City::parse("st johns"), Some(City::StJohns));
        assert_eq!(City::parse("St. John's"), Some(City::StJohns));
        assert_eq!(City::parse("Atlantis"), None);
        assert_eq!(City::parse(""), None);
    }

    #[test]
    fn test_parse_every_display_name() {
        for city in City::ALL {
            assert_eq!(City::parse(city.name()), Some(city));
        }
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(City::Toronto.next(), City::Montreal);
        assert_eq!(City::Whitehorse.next(), City::Toronto);
        assert_eq!(City::Toronto.prev(), City::Whitehorse);
        for city in City::ALL {
            assert_eq!(city.next().prev(), city);
        }
    }

    #[test]
    fn test_index_round_trip() {
        for (i, city) in City::ALL.iter().enumerate() {
            assert_eq!(city.index(), i);
            assert_eq!(City::ALL[i], *city);
        }
    }

    #[test]
    fn test_serde_uses_display_name() {
        let json = serde_json::to_string(&City::StJohns).unwrap();
        assert_eq!(json, "\"St. John's\"");
        let city: City = serde_json::from_str("\"Quebec City\"").unwrap();
        assert_eq!(city, City::QuebecCity);
    }
}
