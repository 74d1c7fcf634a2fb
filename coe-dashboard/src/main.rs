//! COE Analytics Dashboard
//!
//! Three tabs over the analytics API, each with its own filters and chart:
//! - Seasonality (`/`): monthly quota bars against a premium line
//! - Analysis (`/analysis`): premium histogram or quota/premium scatter
//! - Premium (`/premium`): raw premium against its moving average
//!
//! Data flow:
//! 1. On mount: load ECharts and point the API client at the page origin.
//! 2. Each page owns a controller; a filter change that alters the query
//!    issues a GET and stale responses are dropped.
//! 3. Chart options are rebuilt only when a page receives new data.
//!
//! Any other path redirects to the Seasonality tab.

mod pages;
mod routes;

use coe_chart_ui::echarts_bridge;
use coe_chart_ui::state::{window_origin, AppState};
use dioxus::prelude::*;
use routes::Route;

fn main() {
    if let Err(err) = dioxus_logger::init(dioxus_logger::tracing::Level::INFO) {
        eprintln!("failed to init logger: {err}");
    }
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("coe-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        echarts_bridge::load_echarts();
        match window_origin() {
            Some(origin) => state.connect(&origin),
            None => state
                .error_msg
                .set(Some("Cannot determine the page origin.".to_string())),
        }
    });

    rsx! {
        Router::<Route> {}
    }
}
