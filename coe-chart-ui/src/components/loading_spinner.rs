//! Loading indicator.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 8px; color: #A9BCD0; font-size: 13px;",
            "Loading data..."
        }
    }
}
