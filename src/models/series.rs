//! Monthly cost series
//!
//! A series holds exactly twelve CAD values, one per entry of [`MONTH_LABELS`].
//! The fixed length is enforced by the type, so no empty-series case exists.

use serde::{Deserialize, Serialize};

/// Number of months in every series
pub const MONTHS: usize = 12;

/// Month labels shared by every series, July 2024 through June 2025
pub const MONTH_LABELS: [&str; MONTHS] = [
    "2024-07", "2024-08", "2024-09", "2024-10", "2024-11", "2024-12", "2025-01", "2025-02",
    "2025-03", "2025-04", "2025-05", "2025-06",
];

/// Twelve monthly values for one city and one cost category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlySeries([f64; MONTHS]);

impl MonthlySeries {
    /// Create a series from twelve values
    pub const fn new(values: [f64; MONTHS]) -> Self {
        Self(values)
    }

    /// The values in month order
    pub fn values(&self) -> &[f64; MONTHS] {
        &self.0
    }

    /// Value for a month position (0 = first label)
    pub fn get(&self, month: usize) -> Option<f64> {
        self.0.get(month).copied()
    }

    /// Sum of the twelve values
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Arithmetic mean of the twelve values
    pub fn mean(&self) -> f64 {
        self.total() / MONTHS as f64
    }

    /// Smallest value
    pub fn min(&self) -> f64 {
        self.0.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest value
    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}
