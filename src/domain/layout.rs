use std::path::{Path, PathBuf};

/// Resolved locations of the cached body and the ETag paired with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheLayout {
    pub body_path: PathBuf,
    pub etag_path: PathBuf,
}

impl CacheLayout {
    pub fn new(dir: &Path, body_file: &str, etag_file: &str) -> Self {
        Self {
            body_path: dir.join(body_file),
            etag_path: dir.join(etag_file),
        }
    }

    /// Staging path used while a new pair is being written.
    pub fn staging_path(target: &Path) -> PathBuf {
        let mut name = target
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        target.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let layout = CacheLayout::new(Path::new("cache"), "versions.json", "versions.etag");
        assert_eq!(layout.body_path, PathBuf::from("cache/versions.json"));
        assert_eq!(layout.etag_path, PathBuf::from("cache/versions.etag"));
    }

    #[test]
    fn test_staging_path_keeps_extension() {
        let staged = CacheLayout::staging_path(Path::new("cache/versions.json"));
        assert_eq!(staged, PathBuf::from("cache/versions.json.tmp"));
    }
}
