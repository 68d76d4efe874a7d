use std::error::Error as StdError;
use std::time::{ Duration, Instant };

use async_trait::async_trait;
use log::{ debug, warn };

use crate::config::HttpSettings;
use crate::errors::{ SmokeError, SmokeResult };
use crate::models::page::FetchedPage;
use crate::traits::page_fetcher::PageFetcher;

/// Fetches pages over HTTP with `reqwest`.
///
/// Every request gets a fresh connection and a single attempt; there is no
/// retry on any failure.
#[derive(Clone)]
pub struct HttpPageFetcher {
    http_client: reqwest::Client,
    timeout: Duration,
}

impl HttpPageFetcher {
    pub fn new(settings: &HttpSettings) -> SmokeResult<Self> {
        let http_client = reqwest::Client
            ::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| SmokeError::Unexpected(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            timeout: settings.timeout,
        })
    }

    /// Map a reqwest failure onto the three failure kinds.
    fn classify(&self, err: reqwest::Error) -> SmokeError {
        if err.is_timeout() {
            warn!("Request timed out after {:?}", self.timeout);
            SmokeError::Timeout(self.timeout)
        } else if err.is_connect() || err.is_builder() || err.is_request() {
            if err.is_connect() {
                warn!("Connection error - is the server running?");
            }
            SmokeError::Transport(root_cause(&err))
        } else {
            SmokeError::Unexpected(err.to_string())
        }
    }
}

/// The innermost error in a source chain, which carries the actual reason
/// (e.g. "Connection refused") instead of reqwest's generic wrapper text.
fn root_cause(err: &(dyn StdError + 'static)) -> String {
    let mut cause = err;
    while let Some(next) = cause.source() {
        cause = next;
    }
    cause.to_string()
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, url: &str) -> SmokeResult<FetchedPage> {
        debug!("GET {}", url);

        let start = Instant::now();
        let response = self.http_client
            .get(url)
            .send().await
            .map_err(|e| self.classify(e))?;
        let load_time = start.elapsed();

        let status = response.status();
        debug!("{} answered {} in {:?}", url, status, load_time);

        if !status.is_success() {
            return Err(SmokeError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        debug!("Response body length: {} bytes", body.len());

        Ok(FetchedPage {
            status: status.as_u16(),
            load_time,
            body: body.to_vec(),
        })
    }
}
