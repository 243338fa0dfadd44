use std::fs;
use std::io;
use std::path::Path;

use crate::app::{DepfetchError, Result};
use crate::domain::CacheLayout;
use crate::store::CacheStore;

/// Plain-file cache: one file for the raw body, one for its ETag.
///
/// The cache directory is expected to exist already.
#[derive(Debug, Clone)]
pub struct FileCache {
    layout: CacheLayout,
}

impl FileCache {
    pub fn new(layout: CacheLayout) -> Self {
        Self { layout }
    }

    fn stage(target: &Path, contents: &[u8]) -> Result<()> {
        let staging = CacheLayout::staging_path(target);
        fs::write(&staging, contents).map_err(|e| DepfetchError::storage(target, e))
    }

    fn discard_staged(&self) {
        for target in [&self.layout.body_path, &self.layout.etag_path] {
            let _ = fs::remove_file(CacheLayout::staging_path(target));
        }
    }
}

impl CacheStore for FileCache {
    fn layout(&self) -> &CacheLayout {
        &self.layout
    }

    fn read_validator(&self) -> Result<Option<String>> {
        if !self.layout.body_path.is_file() || !self.layout.etag_path.is_file() {
            return Ok(None);
        }

        let etag = match fs::read_to_string(&self.layout.etag_path) {
            Ok(etag) => etag,
            // Removed between the existence check and the read.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(DepfetchError::storage(&self.layout.etag_path, e)),
        };

        let etag = etag.trim();
        if etag.is_empty() {
            Ok(None)
        } else {
            Ok(Some(etag.to_string()))
        }
    }

    fn write_pair(&self, body: &[u8], etag: &str) -> Result<()> {
        let staged = Self::stage(&self.layout.body_path, body)
            .and_then(|_| Self::stage(&self.layout.etag_path, etag.as_bytes()));
        if let Err(e) = staged {
            self.discard_staged();
            return Err(e);
        }

        let body_staging = CacheLayout::staging_path(&self.layout.body_path);
        if let Err(e) = fs::rename(&body_staging, &self.layout.body_path) {
            self.discard_staged();
            return Err(DepfetchError::storage(&self.layout.body_path, e));
        }

        let etag_staging = CacheLayout::staging_path(&self.layout.etag_path);
        if let Err(e) = fs::rename(&etag_staging, &self.layout.etag_path) {
            // The body is already new. Dropping the old ETag makes the next
            // request unconditional. If that fails too, whatever sits at the
            // ETag path is not a readable file and yields no validator.
            if let Err(remove_err) = fs::remove_file(&self.layout.etag_path) {
                tracing::warn!(
                    "Could not drop stale ETag at {}: {}",
                    self.layout.etag_path.display(),
                    remove_err
                );
            }
            self.discard_staged();
            return Err(DepfetchError::storage(&self.layout.etag_path, e));
        }

        tracing::debug!(
            body = %self.layout.body_path.display(),
            etag_file = %self.layout.etag_path.display(),
            "Cache pair replaced"
        );
        Ok(())
    }
}
