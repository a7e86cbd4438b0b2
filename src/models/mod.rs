//! Core data models for the dashboard
//!
//! Closed domains (cities, locales, cost categories) are enums so every
//! lookup is exhaustive; a monthly series is a fixed twelve-value array.

pub mod category;
pub mod city;
pub mod locale;
pub mod series;

pub use category::CostCategory;
pub use city::City;
pub use locale::Locale;
pub use series::{MonthlySeries, MONTHS, MONTH_LABELS};
