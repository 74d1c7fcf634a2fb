//! Tab bar linking the three pages.

use coe_core::nav::Tab;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TabNavProps {
    pub active: Tab,
}

#[component]
pub fn TabNav(props: TabNavProps) -> Element {
    rsx! {
        nav {
            style: "display: flex; gap: 4px; border-bottom: 1px solid rgba(169, 188, 208, 0.2); margin-bottom: 12px;",
            for tab in Tab::ALL {
                Link {
                    key: "{tab.label()}",
                    to: tab.path(),
                    style: tab_style(tab, props.active),
                    "{tab.label()}"
                }
            }
        }
    }
}

fn tab_style(tab: Tab, active: Tab) -> &'static str {
    if tab == active {
        ACTIVE
    } else {
        INACTIVE
    }
}

const ACTIVE: &str = "padding: 8px 16px; color: #66B3BA; border-bottom: 2px solid #66B3BA; text-decoration: none; font-weight: bold;";
const INACTIVE: &str = "padding: 8px 16px; color: #A9BCD0; border-bottom: 2px solid transparent; text-decoration: none;";
