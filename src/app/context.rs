use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::fetcher::{DependencyFetcher, Fetcher, HttpFetcher};
use crate::store::FileCache;

pub struct AppContext {
    pub config: Config,
    pub dependencies: DependencyFetcher<FileCache>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config.http)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        let store = FileCache::new(config.layout());
        let dependencies = DependencyFetcher::new(config.remote_url.clone(), fetcher, store);

        Self {
            config,
            dependencies,
        }
    }
}
