use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::errors::{AppError, AppResult};

/// Retrieves raw article pages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: String) -> AppResult<Vec<u8>>;
}

/// Single-attempt HTTP fetcher with a bounded timeout and a browser user agent.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                AppError::Configuration(format!("Failed to initialize HTTP client: {}", e))
            })?;

        log::debug!("HTTP fetcher initialized with timeout {:?}", timeout);
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: String) -> AppResult<Vec<u8>> {
        log::info!("Fetching article {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                log::warn!("Failed to fetch {}: {}", url, e);
                AppError::Fetch(format!("Failed to fetch URL: {}", e))
            })?;

        let body = response.bytes().await.map_err(|e| {
            log::warn!("Failed to read response body from {}: {}", url, e);
            AppError::Fetch(format!("Failed to read response body: {}", e))
        })?;

        log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}
