//! Start and end year inputs.

use super::{FIELD_STYLE, LABEL_STYLE};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct YearRangePickerProps {
    pub start_year: i32,
    pub end_year: i32,
    pub on_start: EventHandler<i32>,
    pub on_end: EventHandler<i32>,
}

/// Year range picker. Values are not clamped or reordered here; an inverted
/// range is reported by the page's validation instead.
#[component]
pub fn YearRangePicker(props: YearRangePickerProps) -> Element {
    let on_start = props.on_start;
    let on_end = props.on_end;

    rsx! {
        label {
            style: LABEL_STYLE,
            "Start Year"
            input {
                r#type: "number",
                style: FIELD_STYLE,
                value: "{props.start_year}",
                onchange: move |evt: Event<FormData>| {
                    if let Ok(year) = evt.value().trim().parse::<i32>() {
                        on_start.call(year);
                    }
                },
            }
        }
        label {
            style: LABEL_STYLE,
            "End Year"
            input {
                r#type: "number",
                style: FIELD_STYLE,
                value: "{props.end_year}",
                onchange: move |evt: Event<FormData>| {
                    if let Ok(year) = evt.value().trim().parse::<i32>() {
                        on_end.call(year);
                    }
                },
            }
        }
    }
}
