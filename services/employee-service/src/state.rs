use std::sync::Arc;

use anyhow::Result;
use common::config::{AppConfig, CacheBackend};
use coordinator::EmployeeCoordinator;
use storage::{
    EmployeeCache, EmployeeStore, InMemoryEmployeeCache, InMemoryEmployeeStore, RedisEmployeeCache,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub coordinator: EmployeeCoordinator,
    pub cache: Arc<dyn EmployeeCache>,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        tracing::info!("Initializing application state...");

        let store = Arc::new(InMemoryEmployeeStore::default()) as Arc<dyn EmployeeStore>;

        let cache = match config.cache.backend {
            CacheBackend::Redis => {
                tracing::info!("Connecting to Redis...");
                let cache = RedisEmployeeCache::new(&config.cache.redis_url).await?;
                tracing::info!("Redis connected");
                Arc::new(cache) as Arc<dyn EmployeeCache>
            }
            CacheBackend::Memory => {
                tracing::info!("Using in-process employee cache");
                Arc::new(InMemoryEmployeeCache::new()) as Arc<dyn EmployeeCache>
            }
        };

        Ok(Self::from_parts(store, cache))
    }

    pub fn from_parts(store: Arc<dyn EmployeeStore>, cache: Arc<dyn EmployeeCache>) -> Self {
        Self {
            coordinator: EmployeeCoordinator::new(store, cache.clone()),
            cache,
        }
    }
}
