pub mod file;

use crate::app::Result;
use crate::domain::CacheLayout;

pub use file::FileCache;

/// Persistence for the cached body and the ETag that validates it.
///
/// Implementations must keep the two as a pair: a new body is never left
/// next to an old ETag, and the reverse. [`FileCache`] replaces the files by
/// two renames, so for the moment between them the new body does sit next to
/// the old ETag.
pub trait CacheStore {
    fn layout(&self) -> &CacheLayout;

    /// The stored ETag, only when both the body and the ETag are regular files.
    fn read_validator(&self) -> Result<Option<String>>;

    /// Replace body and ETag together.
    fn write_pair(&self, body: &[u8], etag: &str) -> Result<()>;
}
