//! Cache store factory
//!
//! Builds the store selected by [`CacheConfig::backend`] through the
//! provider registry.

use crate::config::{CacheBackend, CacheConfig};
use loadcache_domain::error::{Error, Result};
use loadcache_domain::ports::CacheStore;
use loadcache_providers::{CacheStoreConfig, resolve_cache_store};
use std::sync::Arc;
use tracing::info;

/// Translate the cache configuration into a registry request
pub fn store_config(config: &CacheConfig) -> CacheStoreConfig {
    let store_config = CacheStoreConfig::new(config.backend.store_name());
    match config.backend {
        CacheBackend::Redis => store_config
            .with_uri(config.redis.connection_url())
            .with_connect_timeout(config.redis.connect_timeout()),
        CacheBackend::Memory => store_config.with_max_capacity(config.memory_capacity),
        CacheBackend::Null => store_config,
    }
}

/// Create the store selected by `config`
pub fn create_cache_store(config: &CacheConfig) -> Result<Arc<dyn CacheStore>> {
    let store = resolve_cache_store(&store_config(config)).map_err(Error::configuration)?;
    info!(store = store.provider_name(), "Cache store created");
    Ok(store)
}
