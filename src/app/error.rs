use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum DepfetchError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Cache I/O error at {path}: {source}")]
    Storage {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Server answered 200 without a usable ETag header")]
    MissingEtag,

    #[error("Manifest parse error: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl DepfetchError {
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DepfetchError>;
