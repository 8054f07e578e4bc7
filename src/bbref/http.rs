use std::future::Future;

use reqwest::{Client, Url};
use tracing::debug;

use crate::{
    core::{build_client, html_header_map, SourceConfig},
    error::ShotError,
    Result,
};


/// A fetched document and the URL it was finally served from.
#[derive(Debug, Clone)]
pub struct Page {
    /// Final URL after redirects.
    pub url: Url,
    pub body: String,
}

/// Anything that can hand back the HTML behind a URL.
pub trait PageSource {
    /// Fetch `url` once. Non-success statuses are errors.
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<Page>> + Send;
}

/// Page source backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let headers = html_header_map(config.user_agent.as_deref())?;
        Ok(Self {
            client: build_client(headers, config.timeout)?,
        })
    }
}

impl PageSource for HttpPageSource {
    async fn fetch(&self, url: &Url) -> Result<Page> {
        debug!(%url, "fetching page");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShotError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().clone();
        let body = response.text().await?;
        debug!(url = %final_url, bytes = body.len(), "page fetched");

        Ok(Page {
            url: final_url,
            body,
        })
    }
}
