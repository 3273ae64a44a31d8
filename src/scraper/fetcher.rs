use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::scraper::error::ScrapeError;

// The portal serves degraded markup to default client identifiers.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Transport seam for the pagination loop. Production runs use
/// [`HttpFetcher`]; tests substitute a canned-page fetcher.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        // One connection per request; the portal penalizes reuse patterns.
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(0)
            .build()
            .expect("failed to build http client");

        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        debug!(url = %url, "GET");

        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        let status = res.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            });
        }

        res.text().await.map_err(|e| ScrapeError::Transport {
            url: url.to_string(),
            source: e,
        })
    }
}
