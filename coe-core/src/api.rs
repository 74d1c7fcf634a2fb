//! HTTP client for the analytics API.
//!
//! Shared by the web app (reqwest's fetch backend on `wasm32`) and the native
//! CLI. Requests are relative to a base URL: the page origin in the browser, a
//! configured host on the command line.

use crate::controller::PendingRequest;
use crate::error::FetchError;
use crate::pages::Page;
use log::debug;
use std::time::Duration;
use url::Url;

/// Default per-request timeout for native clients.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin the `/api/*` paths are resolved against.
    pub base_url: Url,
    /// Ignored on `wasm32`, where the browser owns request lifetimes.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            timeout: Some(DEFAULT_TIMEOUT),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        #[allow(unused_mut)]
        let mut builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for a pending request, query string included.
    pub fn url_for(&self, request: &PendingRequest) -> Result<Url, FetchError> {
        let mut url = self.base_url.join(request.path)?;
        if request.query.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&request.query.to_query_string()));
        }
        Ok(url)
    }

    /// Perform the GET for `request` and decode the page's payload.
    ///
    /// Non-success statuses are errors; a success body missing expected
    /// fields decodes to empty collections.
    pub async fn fetch<P: Page>(&self, request: &PendingRequest) -> Result<P::Payload, FetchError> {
        let url = self.url_for(request)?;
        debug!("[COE] {}: GET {}", P::NAME, url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(serde_json::from_str::<P::Payload>(&body)?)
    }
}
