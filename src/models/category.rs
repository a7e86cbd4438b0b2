//! Cost categories
//!
//! Each category owns the value range its synthetic series are drawn from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// A cost-of-living category tracked per city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostCategory {
    /// Monthly rent
    Rent,
    /// Monthly grocery spending
    Groceries,
    /// Monthly utility bills
    Utilities,
}

impl CostCategory {
    /// All categories, in generation order
    pub const ALL: [CostCategory; 3] = [Self::Rent, Self::Groceries, Self::Utilities];

    /// Range (CAD per month) synthetic values are drawn from
    pub fn value_range(&self) -> Range<f64> {
        match self {
            Self::Rent => 1000.0..2000.0,
            Self::Groceries => 300.0..400.0,
            Self::Utilities => 80.0..140.0,
        }
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rent => write!(f, "rent"),
            Self::Groceries => write!(f, "groceries"),
            Self::Utilities => write!(f, "utilities"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert_eq!(CostCategory::Rent.value_range(), 1000.0..2000.0);
        assert_eq!(CostCategory::Groceries.value_range(), 300.0..400.0);
        assert_eq!(CostCategory::Utilities.value_range(), 80.0..140.0);
    }

    #[test]
    fn test_display() {
        let names: Vec<String> = CostCategory::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(names, ["rent", "groceries", "utilities"]);
    }
}
