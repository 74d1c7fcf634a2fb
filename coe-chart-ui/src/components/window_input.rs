//! Moving-average window size input.

use super::{FIELD_STYLE, LABEL_STYLE};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct WindowInputProps {
    pub value: i64,
    pub onchange: EventHandler<i64>,
}

#[component]
pub fn WindowInput(props: WindowInputProps) -> Element {
    let onchange = props.onchange;
    rsx! {
        label {
            style: LABEL_STYLE,
            "Window Size"
            input {
                r#type: "number",
                min: "1",
                style: FIELD_STYLE,
                value: "{props.value}",
                onchange: move |evt: Event<FormData>| {
                    if let Ok(window) = evt.value().trim().parse::<i64>() {
                        onchange.call(window);
                    }
                },
            }
        }
    }
}
