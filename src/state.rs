//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for the backend and the backend base URL.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

/// Connect timeout for backend requests; the overall request timeout is configurable.
const UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Clone is required by Axum; all inner fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub api_url: Arc<str>,
}

impl AppState {
    /// Build state with a client tuned from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .connect_timeout(Duration::from_secs(UPSTREAM_CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self::with_client(http, &config.api_url))
    }

    #[must_use]
    pub fn with_client(http: reqwest::Client, api_url: &str) -> Self {
        Self { http, api_url: Arc::from(api_url.trim_end_matches('/')) }
    }
}
