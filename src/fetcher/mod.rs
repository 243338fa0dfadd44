pub mod dependency;
pub mod http_fetcher;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::app::Result;

pub use dependency::DependencyFetcher;
pub use http_fetcher::HttpFetcher;

#[derive(Debug, Clone)]
pub enum FetchResult {
    /// New content fetched successfully (200)
    Content { body: Vec<u8>, etag: Option<String> },
    /// Content not modified (HTTP 304)
    NotModified,
    /// Any other status; the body is discarded
    Failed { status: StatusCode },
}

#[async_trait]
pub trait Fetcher {
    /// Issue one GET, sending `etag` as `If-None-Match` when present.
    async fn fetch(&self, url: &str, etag: Option<&str>) -> Result<FetchResult>;
}
