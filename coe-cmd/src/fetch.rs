//! One headless refresh cycle through a page controller.

use anyhow::bail;
use coe_core::api::ApiClient;
use coe_core::pages::Page;
use coe_core::{Completion, Controller};
use log::info;
use std::rc::Rc;

/// Validate `filters`, GET the page's endpoint and return the decoded payload.
///
/// Runs the same controller the dashboard uses, so validation, query
/// derivation and error reporting are identical.
pub async fn fetch_page<P: Page>(client: &ApiClient, filters: P::Filters) -> anyhow::Result<Rc<P::Payload>> {
    let mut controller = Controller::<P>::with_filters(filters);
    let request = controller.begin_refresh()?;
    let result = client.fetch::<P>(&request).await;

    match controller.complete(request.seq, result) {
        Completion::Applied => {
            let data = controller.data();
            info!("[COE] {}: {} rows", P::NAME, P::row_count(&data));
            Ok(data)
        }
        Completion::Failed | Completion::Stale => bail!(
            "{} request failed: {}",
            P::NAME,
            controller.status().error_detail().unwrap_or("no response")
        ),
    }
}
