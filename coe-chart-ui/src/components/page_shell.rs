//! Dashboard frame: title, tab bar and the active tab's subtitle.

use super::{ErrorDisplay, TabNav};
use crate::state::AppState;
use coe_core::nav::Tab;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageShellProps {
    pub active: Tab,
    pub children: Element,
}

#[component]
pub fn PageShell(props: PageShellProps) -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif; color: #E8ECF0; background: #0F1419; min-height: 100vh;",
            header {
                h1 {
                    style: "margin: 0 0 12px 0; font-size: 22px;",
                    "COE Analytics Dashboard"
                }
                TabNav { active: props.active }
                p {
                    style: "margin: 0 0 12px 0; font-size: 13px; color: #A9BCD0;",
                    "{props.active.subtitle()}"
                }
            }
            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }
            main { {props.children} }
        }
    }
}
