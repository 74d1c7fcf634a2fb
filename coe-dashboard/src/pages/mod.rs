//! The three dashboard pages.

mod analysis;
mod premium;
mod seasonality;

pub use analysis::Analysis;
pub use premium::Premium;
pub use seasonality::Seasonality;

use coe_chart_ui::components::{ErrorDisplay, LoadingSpinner};
use coe_core::FetchStatus;
use dioxus::prelude::*;

const FILTER_BAR: &str = "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 12px;";
const CARD: &str = "padding: 16px; background: #1A1F26; border: 1px solid rgba(169, 188, 208, 0.15); border-radius: 8px;";

/// `(value, text)` pairs for a [`coe_chart_ui::components::ChoiceSelector`].
fn choices<T>(items: &[T], value: fn(&T) -> &'static str, text: fn(&T) -> &'static str) -> Vec<(String, String)> {
    items
        .iter()
        .map(|item| (value(item).to_string(), text(item).to_string()))
        .collect()
}

/// Loading indicator or error message for the page's latest request.
#[component]
fn StatusLine(status: FetchStatus) -> Element {
    rsx! {
        if status.is_loading() {
            LoadingSpinner {}
        }
        if let Some(detail) = status.error_detail() {
            ErrorDisplay { message: detail.to_string() }
        }
    }
}
