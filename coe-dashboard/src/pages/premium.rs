//! Premium tab: raw premium against the server's moving average.

use super::{choices, StatusLine, CARD, FILTER_BAR};
use coe_chart_ui::components::{
    ChartContainer, ChartHeader, ChoiceSelector, LoadButton, VehicleClassSelector, WindowInput,
    YearRangePicker,
};
use coe_chart_ui::state::{use_chart_option, use_page_state};
use coe_core::domain::XAxisMode;
use coe_core::nav::Tab;
use coe_core::pages::{Page, PremiumPage};
use coe_data::options::premium_option;
use dioxus::prelude::*;

#[component]
pub fn Premium() -> Element {
    let mut page = use_page_state::<PremiumPage>();
    let option = use_chart_option(page, premium_option);

    let filters = page.filters();
    let status = page.status();
    let rows = PremiumPage::row_count(&page.data());
    let modes = choices(&XAxisMode::ALL, XAxisMode::as_str, XAxisMode::as_str);

    rsx! {
        section {
            style: FILTER_BAR,
            VehicleClassSelector {
                options: PremiumPage::VEHICLE_CLASSES,
                value: filters.vehicle_class,
                label: "Category",
                onchange: move |class| page.update(|f| f.vehicle_class = class),
            }
            WindowInput {
                value: filters.window,
                onchange: move |window| page.update(|f| f.window = window),
            }
            ChoiceSelector {
                id: "x-axis-select",
                label: "X-Axis",
                choices: modes,
                value: filters.x_axis_mode.as_str(),
                onchange: move |value: String| {
                    if let Ok(mode) = value.parse::<XAxisMode>() {
                        page.update(|f| f.x_axis_mode = mode);
                    }
                },
            }
            YearRangePicker {
                start_year: filters.start_year,
                end_year: filters.end_year,
                on_start: move |year| page.update(|f| f.start_year = year),
                on_end: move |year| page.update(|f| f.end_year = year),
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
                title: Tab::Premium.heading(),
                note: format!("Window: {}, rows: {rows}", filters.window),
            }
            ChartContainer {
                id: "premium-chart",
                option: option(),
                loading: status.is_loading(),
                min_height: 420,
            }
        }
    }
}
