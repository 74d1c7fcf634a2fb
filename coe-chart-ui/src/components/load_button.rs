//! Button that re-issues the current query.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadButtonProps {
    /// Disables the button while a request is in flight
    #[props(default = false)]
    pub loading: bool,
    pub onclick: EventHandler<()>,
}

#[component]
pub fn LoadButton(props: LoadButtonProps) -> Element {
    let onclick = props.onclick;
    let label = if props.loading { "Loading..." } else { "Load Data" };
    rsx! {
        button {
            style: "padding: 8px 16px; background: #66B3BA; color: #0F1419; border: none; border-radius: 4px; font-weight: bold; cursor: pointer; align-self: flex-end;",
            disabled: props.loading,
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
