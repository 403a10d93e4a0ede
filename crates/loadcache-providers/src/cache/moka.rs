//! Moka in-memory cache store
//!
//! Concurrent in-memory store with per-entry expiry, mirroring the TTL
//! semantics of the Redis store without a server. Entries are private to
//! the process.
//!
//! ## Example
//!
//! ```ignore
//! use loadcache_providers::cache::MokaCacheStore;
//!
//! let store = MokaCacheStore::with_capacity(1000);
//! ```

use crate::constants::MEMORY_DEFAULT_CAPACITY;
use crate::registry::{CACHE_STORES, CacheStoreConfig, CacheStoreEntry};
use async_trait::async_trait;
use loadcache_domain::error::Result;
use loadcache_domain::ports::CacheStore;
use moka::Expiry;
use moka::future::Cache;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct StoredPayload {
    payload: String,
    ttl: Option<Duration>,
}

/// Expires each entry after the TTL it was written with
struct PayloadExpiry;

impl Expiry<String, StoredPayload> for PayloadExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &StoredPayload,
        _created_at: Instant,
    ) -> Option<Duration> {
        value.ttl
    }

    // Overwrites restart the clock, like SET EX does.
    fn expire_after_update(
        &self,
        _key: &String,
        value: &StoredPayload,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        value.ttl
    }
}

/// Moka-based in-memory cache store
#[derive(Clone)]
pub struct MokaCacheStore {
    cache: Cache<String, StoredPayload>,
    max_capacity: u64,
}

impl Default for MokaCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaCacheStore {
    /// Create a new Moka store with default capacity
    pub fn new() -> Self {
        Self::with_capacity(MEMORY_DEFAULT_CAPACITY)
    }

    /// Create a new Moka store holding at most `max_capacity` entries
    pub fn with_capacity(max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PayloadExpiry)
            .build();

        Self {
            cache,
            max_capacity,
        }
    }

    /// Get the maximum capacity of the store
    pub fn max_capacity(&self) -> u64 {
        self.max_capacity
    }

    /// Number of live entries after pending maintenance has run
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

#[async_trait]
impl CacheStore for MokaCacheStore {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.cache.get(key).await.map(|stored| stored.payload))
    }

    async fn write(&self, key: &str, payload: &str, ttl: Duration) -> Result<()> {
        let stored = StoredPayload {
            payload: payload.to_string(),
            ttl: (!ttl.is_zero()).then_some(ttl),
        };
        self.cache.insert(key.to_string(), stored).await;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.cache.remove(key).await.is_some())
    }

    async fn clear_all(&self) -> Result<()> {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
        Ok(())
    }

    async fn clear_prefix(&self, prefix: &str) -> Result<u64> {
        let matching: Vec<Arc<String>> = self
            .cache
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key)
            .collect();

        let mut deleted = 0;
        for key in matching {
            if self.cache.remove(key.as_str()).await.is_some() {
                deleted += 1;
            }
        }
        Ok(deleted)
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheStore")
            .field("max_capacity", &self.max_capacity)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

#[linkme::distributed_slice(CACHE_STORES)]
static MOKA_STORE: CacheStoreEntry = CacheStoreEntry {
    name: "memory",
    description: "Moka in-memory store",
    factory: |config: &CacheStoreConfig| {
        let store = match config.max_capacity {
            Some(max_capacity) => MokaCacheStore::with_capacity(max_capacity),
            None => MokaCacheStore::new(),
        };
        Ok(Arc::new(store))
    },
};
