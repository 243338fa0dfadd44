use std::sync::Arc;

use crate::app::{DepfetchError, Result};
use crate::domain::FetchOutcome;
use crate::fetcher::{FetchResult, Fetcher};
use crate::store::CacheStore;

/// Keeps one remote resource mirrored in a [`CacheStore`] using
/// `If-None-Match`.
///
/// Each call to [`fetch`](Self::fetch) issues exactly one request and writes
/// either nothing or a full body/ETag pair.
pub struct DependencyFetcher<S: CacheStore> {
    url: String,
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    store: S,
}

impl<S: CacheStore> DependencyFetcher<S> {
    pub fn new(
        url: impl Into<String>,
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        store: S,
    ) -> Self {
        Self {
            url: url.into(),
            fetcher,
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn fetch(&self) -> Result<FetchOutcome> {
        let validator = self.store.read_validator()?;
        match &validator {
            Some(etag) => tracing::debug!("Revalidating {} with ETag {}", self.url, etag),
            None => tracing::debug!("No cached copy of {}, fetching unconditionally", self.url),
        }

        let result = self.fetcher.fetch(&self.url, validator.as_deref()).await?;

        match result {
            FetchResult::NotModified => {
                tracing::debug!("{} not modified", self.url);
                Ok(FetchOutcome::UpToDate)
            }
            FetchResult::Content { body, etag } => {
                let etag = etag.ok_or(DepfetchError::MissingEtag)?;
                self.store.write_pair(&body, &etag)?;
                tracing::info!(bytes = body.len(), etag = %etag, "Cached new copy of {}", self.url);

                Ok(FetchOutcome::Updated {
                    bytes: body.len(),
                    etag,
                })
            }
            FetchResult::Failed { status } => {
                tracing::warn!(%status, "Fetching {} failed", self.url);
                Ok(FetchOutcome::Failed { status })
            }
        }
    }
}
