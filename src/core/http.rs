//! HTTP client setup for the data source

use std::time::Duration;

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT},
    Client,
};

/// The source serves simplified pages to obvious bots, so present as a browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default per-request timeout; requests are attempted once.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the default headers sent with every page request.
///
/// `user_agent` overrides [`BROWSER_USER_AGENT`] when given.
pub fn html_header_map(user_agent: Option<&str>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml"),
    );
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    let agent = user_agent.unwrap_or(BROWSER_USER_AGENT);
    h.insert(USER_AGENT, HeaderValue::from_str(agent)?);
    Ok(h)
}

/// Build the shared client used for every page fetch.
pub fn build_client(headers: HeaderMap, timeout: Duration) -> Result<Client> {
    Ok(Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()?)
}
