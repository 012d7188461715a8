use std::time::Duration;

use anyhow::{Context, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Thin wrapper around one shared HTTP client. A non-2xx status or
/// network error is fatal for the whole run; nothing retries.
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// GET one course page and return its body.
    pub async fn page(&self, url: &str) -> Result<String> {
        let body = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request failed for {url}"))?
            .error_for_status()
            .with_context(|| format!("Bad status for {url}"))?
            .text()
            .await
            .with_context(|| format!("Failed to read body of {url}"))?;
        Ok(body)
    }
}
