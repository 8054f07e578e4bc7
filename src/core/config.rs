//! Data source configuration resolved from flags and the environment.

use std::time::Duration;

use reqwest::Url;

use super::http::REQUEST_TIMEOUT;
use crate::{error::ShotError, Result, BASE_URL_ENV_VAR};

/// Site searched when neither a flag nor the environment names one.
pub const DEFAULT_BASE_URL: &str = "https://www.basketball-reference.com";

/// Where and how profiles are fetched.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub base_url: Url,
    /// Skip the network entirely and serve sample data.
    pub offline: bool,
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl SourceConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            offline: false,
            timeout: REQUEST_TIMEOUT,
            user_agent: None,
        }
    }

    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the browser User-Agent; `None` keeps the default.
    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Parse a base URL, mapping failures to [`ShotError::InvalidBaseUrl`].
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| ShotError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ShotError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "not a base URL".to_string(),
        });
    }
    Ok(url)
}

/// Pick the base URL: explicit flag, then `SHOTZONE_BASE_URL`, then the default.
pub fn resolve_base_url(base_url: Option<&str>) -> Result<Url> {
    match base_url {
        Some(raw) => parse_base_url(raw),
        None => match std::env::var(BASE_URL_ENV_VAR) {
            Ok(raw) if !raw.trim().is_empty() => parse_base_url(&raw),
            _ => parse_base_url(DEFAULT_BASE_URL),
        },
    }
}
