use async_trait::async_trait;

use crate::errors::SmokeResult;
use crate::models::page::FetchedPage;

/// Transport used by the page tester to retrieve one page.
///
/// Implementations perform a single attempt per call and time it. Non-2xx
/// responses must come back as `SmokeError::HttpStatus`.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` once and return the status, load time and raw body
    async fn fetch_page(&self, url: &str) -> SmokeResult<FetchedPage>;
}
