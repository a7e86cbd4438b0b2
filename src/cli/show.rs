//! CLI commands that print to the terminal

use crate::dataset::Dataset;
use crate::display::{format_city_list, format_dashboard};
use crate::projection::DashboardView;
use crate::state::DashboardState;

/// Print the projected dashboard as a text report
pub fn handle_show(state: &DashboardState, dataset: &Dataset) {
    let view = DashboardView::project(state, dataset);
    print!("{}", format_dashboard(&view));
}

/// Print the available cities
pub fn handle_cities() {
    print!("{}", format_city_list());
}
