//! Analysis tab: premium distribution or supply vs price scatter.
//!
//! The view toggle is local; switching it never triggers a request.

use super::{choices, StatusLine, CARD, FILTER_BAR};
use coe_chart_ui::components::{
    ChartContainer, ChartHeader, ChoiceSelector, LoadButton, VehicleClassSelector, YearRangePicker,
};
use coe_chart_ui::state::{use_chart_option, use_page_state};
use coe_core::domain::AnalysisView;
use coe_core::pages::{AnalysisPage, Page};
use coe_data::options::{distribution_option, scatter_option};
use dioxus::prelude::*;

#[component]
pub fn Analysis() -> Element {
    let mut page = use_page_state::<AnalysisPage>();
    let mut view = use_signal(AnalysisView::default);
    let histogram = use_chart_option(page, distribution_option);
    let scatter = use_chart_option(page, scatter_option);

    let filters = page.filters();
    let status = page.status();
    let points = AnalysisPage::row_count(&page.data());
    let current = view();
    let option = match current {
        AnalysisView::Histogram => histogram(),
        AnalysisView::Scatter => scatter(),
    };
    let views = choices(&AnalysisView::ALL, AnalysisView::as_str, AnalysisView::label);

    rsx! {
        section {
            style: FILTER_BAR,
            VehicleClassSelector {
                options: AnalysisPage::VEHICLE_CLASSES,
                value: filters.vehicle_class,
                onchange: move |class| page.update(|f| f.vehicle_class = class),
            }
            YearRangePicker {
                start_year: filters.start_year,
                end_year: filters.end_year,
                on_start: move |year| page.update(|f| f.start_year = year),
                on_end: move |year| page.update(|f| f.end_year = year),
            }
            ChoiceSelector {
                id: "view-select",
                label: "Chart",
                choices: views,
                value: current.as_str(),
                onchange: move |value: String| {
                    if let Ok(selected) = value.parse::<AnalysisView>() {
                        view.set(selected);
                    }
                },
            }
            LoadButton {
                loading: status.is_loading(),
                onclick: move |_| page.reload(),
            }
        }
        StatusLine { status: status.clone() }
        div {
            style: CARD,
            ChartHeader {
                title: current.heading(),
                note: format!("Points: {points}"),
            }
            ChartContainer {
                key: "{current.as_str()}",
                id: format!("analysis-{}-chart", current.as_str()),
                option,
                loading: status.is_loading(),
                min_height: 420,
            }
        }
    }
}
