//! Configuration management for depfetch.
//!
//! Configuration is read from `~/.config/depfetch/config.toml`, or from the
//! path given with `--config`. Every field is optional; missing fields fall
//! back to the mcmeta version summary and the `.rpb_cache` directory.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::domain::CacheLayout;

pub const DEFAULT_REMOTE_URL: &str =
    "https://raw.githubusercontent.com/misode/mcmeta/summary/versions/data.json";
pub const DEFAULT_CACHE_DIR: &str = ".rpb_cache";
pub const DEFAULT_BODY_FILE: &str = "versions.json";
pub const DEFAULT_ETAG_FILE: &str = "versions.etag";

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Resource to keep in sync.
    pub remote_url: String,
    /// Directory holding the cached body and its ETag. Never created here.
    pub cache_dir: PathBuf,
    pub body_file: String,
    pub etag_file: String,
    pub http: HttpConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote_url: DEFAULT_REMOTE_URL.to_string(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            body_file: DEFAULT_BODY_FILE.to_string(),
            etag_file: DEFAULT_ETAG_FILE.to_string(),
            http: HttpConfig::default(),
        }
    }
}

/// Options for the underlying HTTP client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request timeout. `None` waits for as long as the server takes.
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: format!("depfetch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. When no path is given the default
    /// location is tried, and a missing file there yields the defaults.
    /// The file is never created.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = Self::default_config_path()?;
                if path.exists() {
                    Self::from_file(&path)?
                } else {
                    tracing::debug!("No config at {}, using defaults", path.display());
                    Self::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path: `~/.config/depfetch/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("depfetch").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Check the values a fetch cycle depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parsed_url()?;

        for name in [&self.body_file, &self.etag_file] {
            if !is_plain_file_name(name) {
                return Err(ConfigError::Invalid(format!(
                    "cache file name must be a single path component: {:?}",
                    name
                )));
            }
        }

        if self.body_file == self.etag_file {
            return Err(ConfigError::Invalid(
                "body_file and etag_file must differ".into(),
            ));
        }

        // Each file is staged next to itself as `<name>.tmp` before the swap.
        let layout = self.layout();
        if CacheLayout::staging_path(&layout.body_path) == layout.etag_path
            || CacheLayout::staging_path(&layout.etag_path) == layout.body_path
        {
            return Err(ConfigError::Invalid(format!(
                "body_file {:?} and etag_file {:?} collide with each other's staging file",
                self.body_file, self.etag_file
            )));
        }

        Ok(())
    }

    pub fn parsed_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.remote_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.remote_url.clone(),
            source: e,
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::Invalid(format!(
                "unsupported scheme {:?} in remote_url",
                other
            ))),
        }
    }

    /// Paths of the cache pair described by this configuration.
    pub fn layout(&self) -> CacheLayout {
        CacheLayout::new(&self.cache_dir, &self.body_file, &self.etag_file)
    }
}

fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid remote_url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("{0}")]
    Invalid(String),
}
