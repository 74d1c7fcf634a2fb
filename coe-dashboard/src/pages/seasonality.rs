//! Seasonality tab: monthly quota and premium for one vehicle class.

use super::{choices, StatusLine, CARD, FILTER_BAR};
use coe_chart_ui::components::{
    ChartContainer, ChartHeader, ChoiceSelector, LoadButton, VehicleClassSelector, YearRangePicker,
};
use coe_chart_ui::state::{use_chart_option, use_page_state};
use coe_core::domain::Aggregation;
use coe_core::nav::Tab;
use coe_core::pages::{Page, SeasonalityPage};
use coe_data::options::seasonality_option;
use dioxus::prelude::*;

#[component]
pub fn Seasonality() -> Element {
    let mut page = use_page_state::<SeasonalityPage>();
    let option = use_chart_option(page, seasonality_option);

    let filters = page.filters();
    let status = page.status();
    let rows = SeasonalityPage::row_count(&page.data());
    let aggregations = choices(&Aggregation::ALL, Aggregation::as_str, Aggregation::label);

    rsx! {
        section {
            style: FILTER_BAR,
            VehicleClassSelector {
                options: SeasonalityPage::VEHICLE_CLASSES,
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
                id: "aggregation-select",
                label: "Aggregation",
                choices: aggregations,
                value: filters.aggregation.as_str(),
                onchange: move |value: String| {
                    if let Ok(aggregation) = value.parse::<Aggregation>() {
                        page.update(|f| f.aggregation = aggregation);
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
                title: Tab::Seasonality.heading(),
                note: format!("Rows: {rows}"),
            }
            ChartContainer {
                id: "seasonality-chart",
                option: option(),
                loading: status.is_loading(),
                min_height: 420,
            }
        }
    }
}
