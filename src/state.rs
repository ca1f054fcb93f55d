//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only holds the upstream client; the host keeps no lead data of its own.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Leads service base URL, without a trailing slash.
    pub upstream: Arc<str>,
}

impl AppState {
    /// Build state with a pooled client bounded by the configured timeout.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()?;
        Ok(Self::new(http, &config.api_url))
    }

    #[must_use]
    pub fn new(http: reqwest::Client, upstream: &str) -> Self {
        Self { http, upstream: Arc::from(upstream.trim_end_matches('/')) }
    }
}
