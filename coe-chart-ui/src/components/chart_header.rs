//! Chart card heading.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    #[props(into)]
    pub title: String,
    /// Optional note under the title (e.g. "Rows: 12")
    #[props(default, into)]
    pub note: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px; display: flex; justify-content: space-between; align-items: baseline;",
            h3 {
                style: "margin: 0; font-size: 16px; color: #E8ECF0;",
                "{props.title}"
            }
            if !props.note.is_empty() {
                span {
                    style: "font-size: 12px; color: #A9BCD0;",
                    "{props.note}"
                }
            }
        }
    }
}
