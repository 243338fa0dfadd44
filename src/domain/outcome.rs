use reqwest::StatusCode;

/// What a single fetch cycle did to the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Server confirmed the cached copy (304). Nothing written.
    UpToDate,
    /// New body and ETag written as a pair.
    Updated { bytes: usize, etag: String },
    /// Any other status. Nothing written.
    Failed { status: StatusCode },
}

impl FetchOutcome {
    pub fn wrote_cache(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}
