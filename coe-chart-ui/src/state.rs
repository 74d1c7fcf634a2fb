//! Application state managed via Dioxus context.
//!
//! `AppState` holds the API client shared by every page and is provided via
//! `use_context_provider`. Each page owns its own controller through
//! [`use_page_state`]; pages never share filters or data.

use coe_core::api::{ApiClient, ClientConfig};
use coe_core::pages::Page;
use coe_core::{Controller, FetchStatus};
use coe_data::OptionMemo;
use dioxus::prelude::*;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// API client (None until connected)
    pub client: Signal<Option<ApiClient>>,
    /// Set when the client could not be built
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            client: Signal::new(None),
            error_msg: Signal::new(None),
        }
    }

    /// Build the API client against `base_url`.
    pub fn connect(&mut self, base_url: &str) {
        match ClientConfig::new(base_url).and_then(ApiClient::new) {
            Ok(client) => {
                log::info!("[COE] API base URL: {}", client.base_url());
                self.client.set(Some(client));
                self.error_msg.set(None);
            }
            Err(err) => {
                log::error!("[COE] cannot use API base URL {:?}: {}", base_url, err);
                self.error_msg.set(Some(err.to_string()));
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// `window.location.origin`, the API base URL in the browser.
pub fn window_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Handle to one page's controller signal.
pub struct PageState<P: Page> {
    pub controller: Signal<Controller<P>>,
    app: AppState,
}

impl<P: Page> Clone for PageState<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Page> Copy for PageState<P> {}

impl<P: Page> PageState<P> {
    pub fn filters(&self) -> P::Filters {
        self.controller.read().filters().clone()
    }

    /// Edit the filters in place. A changed query triggers a refresh.
    pub fn update(&mut self, edit: impl FnOnce(&mut P::Filters)) {
        edit(self.controller.write().filters_mut());
    }

    pub fn status(&self) -> FetchStatus {
        self.controller.read().status().clone()
    }

    pub fn data(&self) -> Rc<P::Payload> {
        self.controller.read().data()
    }

    /// Issue a request for the current filters, changed or not.
    pub fn reload(&self) {
        let Some(client) = self.app.client.peek().clone() else {
            log::warn!("[COE] {}: no API client, skipping refresh", P::NAME);
            return;
        };
        let mut controller = self.controller;
        let request = match controller.write().begin_refresh() {
            Ok(request) => request,
            Err(_) => return,
        };
        spawn(async move {
            let result = client.fetch::<P>(&request).await;
            controller.write().complete(request.seq, result);
        });
    }
}

/// Create the page's controller with default filters and keep it fresh.
///
/// The effect subscribes only to the derived query, so status and data
/// updates written by a completing request do not re-trigger it.
pub fn use_page_state<P: Page>() -> PageState<P> {
    let app = use_context::<AppState>();
    let controller = use_signal(Controller::<P>::new);
    let page = PageState { controller, app };

    let query = use_memo(move || controller.read().query());
    use_effect(move || {
        let _ = query.read();
        let connected = app.client.read().is_some();
        if connected && page.controller.peek().needs_refresh() {
            page.reload();
        }
    });

    page
}

/// Chart option derived from the page's current data.
///
/// Recomputed only when the controller swaps in a new payload; filter edits
/// and status changes hand back the cached option.
pub fn use_chart_option<P: Page>(
    page: PageState<P>,
    derive: fn(&P::Payload) -> Value,
) -> Memo<Rc<Value>> {
    let cache = use_hook(|| Rc::new(RefCell::new(OptionMemo::new(derive))));
    use_memo(move || {
        let data = page.controller.read().data();
        cache.borrow_mut().get(&data)
    })
}
