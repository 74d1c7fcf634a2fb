//! Dropdown over a fixed list of string-valued choices.

use super::{FIELD_STYLE, LABEL_STYLE};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChoiceSelectorProps {
    #[props(into)]
    pub id: String,
    #[props(into)]
    pub label: String,
    /// `(value, display text)` pairs in display order
    pub choices: Vec<(String, String)>,
    #[props(into)]
    pub value: String,
    pub onchange: EventHandler<String>,
}

/// Used for aggregation, x-axis mode and analysis view. Callers parse the
/// selected value back into their enum.
#[component]
pub fn ChoiceSelector(props: ChoiceSelectorProps) -> Element {
    let onchange = props.onchange;
    rsx! {
        label {
            r#for: "{props.id}",
            style: LABEL_STYLE,
            "{props.label}"
            select {
                id: "{props.id}",
                style: FIELD_STYLE,
                onchange: move |evt: Event<FormData>| onchange.call(evt.value()),
                for (value, text) in props.choices.iter() {
                    option {
                        value: "{value}",
                        selected: *value == props.value,
                        "{text}"
                    }
                }
            }
        }
    }
}
