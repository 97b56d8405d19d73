use std::sync::Arc;

use affpress::api::ApiClient;
use affpress::common::{ApiError, AppConfig};
use affpress::services::QueryCache;

/// Shared by every worker. The cache is shared too, so all workers serve
/// the same fresh copy of each public document.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub cache: QueryCache,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, ApiError> {
        Ok(Self {
            api: ApiClient::new(&config)?,
            cache: QueryCache::new(config.cache_ttl),
            config: Arc::new(config),
        })
    }
}
