use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ETAG, IF_NONE_MATCH};
use reqwest::Client;

use crate::app::Result;
use crate::config::HttpConfig;
use crate::domain::ResponseStatus;
use crate::fetcher::{FetchResult, Fetcher};

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str());

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, etag: Option<&str>) -> Result<FetchResult> {
        let mut headers = HeaderMap::new();

        if let Some(etag) = etag {
            match HeaderValue::from_str(etag) {
                Ok(value) => {
                    headers.insert(IF_NONE_MATCH, value);
                }
                Err(_) => {
                    tracing::warn!("Cached ETag {:?} is not a valid header value, ignoring", etag);
                }
            }
        }

        tracing::debug!(url, conditional = headers.contains_key(IF_NONE_MATCH), "GET");
        let response = self.client.get(url).headers(headers).send().await?;
        let status = response.status();

        match ResponseStatus::from(status) {
            ResponseStatus::NotModified => Ok(FetchResult::NotModified),
            ResponseStatus::Success => {
                let etag = response
                    .headers()
                    .get(ETAG)
                    .and_then(|v| v.to_str().ok())
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(String::from);

                let body = response.bytes().await?.to_vec();

                Ok(FetchResult::Content { body, etag })
            }
            ResponseStatus::Other(status) => {
                tracing::debug!(%status, "Unexpected response status");
                Ok(FetchResult::Failed { status })
            }
        }
    }
}
