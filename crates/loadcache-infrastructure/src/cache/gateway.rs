//! Store gateway
//!
//! Wraps a [`CacheStore`] with the payload codec and contains every failure:
//! store errors and undecodable payloads are logged and turned into
//! "nothing happened", never returned.

use super::codec::PayloadCodec;
use super::stats::StatsRecorder;
use loadcache_domain::Namespace;
use loadcache_domain::ports::CacheStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Failure-containing access to a cache store
#[derive(Debug, Clone)]
pub struct StoreGateway {
    store: Arc<dyn CacheStore>,
    codec: PayloadCodec,
    stats: Arc<StatsRecorder>,
}

impl StoreGateway {
    /// Create a gateway over `store`
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self {
            store,
            codec: PayloadCodec::new(),
            stats: Arc::new(StatsRecorder::new()),
        }
    }

    /// The wrapped store
    pub fn store(&self) -> &Arc<dyn CacheStore> {
        &self.store
    }

    /// Counters updated by this gateway
    pub fn stats(&self) -> &Arc<StatsRecorder> {
        &self.stats
    }

    /// Read and decode a value; any failure reads as a miss
    pub async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let payload = match self.store.read(key).await {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                debug!(key, "Value not found in cache");
                self.stats.record_miss();
                return None;
            }
            Err(e) => {
                error!(
                    key,
                    store = self.store.provider_name(),
                    error = %e,
                    "Error occurred while reading from cache"
                );
                self.stats.record_miss();
                return None;
            }
        };

        match self.codec.decode(&payload) {
            Ok(value) => {
                debug!(key, "Value found in cache");
                self.stats.record_hit();
                Some(value)
            }
            Err(e) => {
                warn!(key, error = %e, "Discarding undecodable cache entry");
                self.stats.record_miss();
                None
            }
        }
    }

    /// Encode and store a value with a TTL
    pub async fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T, ttl: Duration) {
        let payload = match self.codec.encode(value) {
            Ok(payload) => payload,
            Err(e) => {
                error!(key, error = %e, "Failed to encode value for cache");
                self.stats.record_failure();
                return;
            }
        };

        match self.store.write(key, &payload, ttl).await {
            Ok(()) => {
                debug!(key, ttl_secs = ttl.as_secs(), "Value written to cache");
                self.stats.record_write();
            }
            Err(e) => {
                error!(
                    key,
                    store = self.store.provider_name(),
                    error = %e,
                    "Error occurred while setting cache value"
                );
                self.stats.record_failure();
            }
        }
    }

    /// Remove one key
    pub async fn remove(&self, key: &str) {
        match self.store.remove(key).await {
            Ok(removed) => debug!(key, removed, "Cache key deleted"),
            Err(e) => error!(
                key,
                store = self.store.provider_name(),
                error = %e,
                "Error occurred while deleting cache key"
            ),
        }
    }

    /// Remove every key under `namespace`
    pub async fn clear_namespace(&self, namespace: &Namespace) {
        match self.store.clear_prefix(&namespace.key_prefix()).await {
            Ok(deleted) => debug!(namespace = %namespace, deleted, "Cache namespace cleared"),
            Err(e) => error!(
                namespace = %namespace,
                store = self.store.provider_name(),
                error = %e,
                "Error occurred while clearing cache namespace"
            ),
        }
    }

    /// Remove every key in the store
    pub async fn clear_all(&self) {
        match self.store.clear_all().await {
            Ok(()) => debug!(store = self.store.provider_name(), "Cache cleared"),
            Err(e) => error!(
                store = self.store.provider_name(),
                error = %e,
                "Error occurred while clearing cache"
            ),
        }
    }
}
