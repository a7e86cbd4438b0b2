//! Display formatting for terminal output
//!
//! Provides utilities for formatting projected dashboards as plain text.

pub mod dashboard;
pub mod report;

pub use dashboard::{format_city_list, format_dashboard};
