//! Chart container component that owns one ECharts instance.

use crate::echarts_bridge;
use dioxus::prelude::*;
use serde_json::Value;
use std::rc::Rc;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (ECharts binds to this)
    #[props(into)]
    pub id: String,
    /// ECharts option to draw
    pub option: Rc<Value>,
    /// Whether a request is in flight
    #[props(default = false)]
    pub loading: bool,
    /// Minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

/// A container div for an ECharts chart with loading overlay.
///
/// Redraws whenever `option` changes and disposes the instance on unmount.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let id = props.id.clone();
    let option = props.option.clone();
    use_effect(use_reactive((&id, &option), |(id, option)| {
        echarts_bridge::render_option(&id, &option);
    }));

    let dispose_id = props.id.clone();
    use_drop(move || echarts_bridge::dispose_chart(&dispose_id));

    let style = format!(
        "height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 8px; right: 12px; font-size: 12px; color: #A9BCD0; z-index: 1;",
                    "Loading chart..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
        }
    }
}
