//! URL routing: one route per tab, everything else redirected.

use crate::pages::{Analysis, Premium, Seasonality};
use coe_chart_ui::components::PageShell;
use coe_core::nav::Tab;
use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Seasonality {},
        #[route("/analysis")]
        Analysis {},
        #[route("/premium")]
        Premium {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    pub fn for_tab(tab: Tab) -> Self {
        match tab {
            Tab::Seasonality => Route::Seasonality {},
            Tab::Analysis => Route::Analysis {},
            Tab::Premium => Route::Premium {},
        }
    }
}

/// Title, tab bar and subtitle around the active page.
#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();
    let active = Tab::resolve(&route.to_string());

    rsx! {
        PageShell {
            active,
            Outlet::<Route> {}
        }
    }
}

/// Unknown paths land on the tab [`Tab::resolve`] picks for them.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    let target = Route::for_tab(Tab::resolve(&path));

    use_effect(move || {
        log::info!("[COE] no page at {}, redirecting to {}", path, target);
        navigator().replace(target.clone());
    });

    rsx! {}
}
