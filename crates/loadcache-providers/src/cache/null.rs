//! Null cache store
//!
//! A store that keeps nothing. Every read is a miss, so an adapter backed
//! by it behaves exactly as if caching were disabled.

use crate::registry::{CACHE_STORES, CacheStoreConfig, CacheStoreEntry};
use async_trait::async_trait;
use loadcache_domain::error::Result;
use loadcache_domain::ports::CacheStore;
use std::sync::Arc;
use std::time::Duration;

/// Null cache store that doesn't store anything
///
/// # Example
///
/// ```rust
/// use loadcache_providers::cache::NullCacheStore;
///
/// let store = NullCacheStore::new();
/// // All operations succeed but nothing is cached
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullCacheStore;

impl NullCacheStore {
    /// Create a new null cache store
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheStore for NullCacheStore {
    async fn read(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn write(&self, _key: &str, _payload: &str, _ttl: Duration) -> Result<()> {
        Ok(())
    }

    async fn remove(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn clear_all(&self) -> Result<()> {
        Ok(())
    }

    async fn clear_prefix(&self, _prefix: &str) -> Result<u64> {
        Ok(0)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

#[linkme::distributed_slice(CACHE_STORES)]
static NULL_STORE: CacheStoreEntry = CacheStoreEntry {
    name: "null",
    description: "No-op store (caching disabled)",
    factory: |_config: &CacheStoreConfig| Ok(Arc::new(NullCacheStore::new())),
};
