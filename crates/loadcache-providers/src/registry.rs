//! Cache Store Registry
//!
//! Stores register themselves in the [`CACHE_STORES`] distributed slice and
//! are created by name at runtime through [`resolve_cache_store`].

use crate::CacheStore;
use std::sync::Arc;
use std::time::Duration;

/// Configuration for cache store creation
///
/// Contains every option a store might need. Stores use what they need and
/// ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct CacheStoreConfig {
    /// Store name (e.g., "redis", "moka", "null")
    pub provider: String,
    /// Connection URI (for distributed stores)
    pub uri: Option<String>,
    /// Connection establishment limit (for distributed stores)
    pub connect_timeout: Option<Duration>,
    /// Maximum number of entries (for local stores)
    pub max_capacity: Option<u64>,
}

impl CacheStoreConfig {
    /// Create a new config with the given store name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the URI
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Set the connection timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the maximum capacity
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }
}

/// Registry entry for cache stores
pub struct CacheStoreEntry {
    /// Unique store name (e.g., "redis", "moka", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a store instance
    pub factory: fn(&CacheStoreConfig) -> Result<Arc<dyn CacheStore>, String>,
}

/// Every store compiled into this crate
#[linkme::distributed_slice]
pub static CACHE_STORES: [CacheStoreEntry] = [..];

/// Resolve a cache store by name from the registry
///
/// # Returns
/// * `Ok(Arc<dyn CacheStore>)` - Created store instance
/// * `Err(String)` - Error message if the store is unknown or creation failed
pub fn resolve_cache_store(config: &CacheStoreConfig) -> Result<Arc<dyn CacheStore>, String> {
    let name = config.provider.as_str();

    if let Some(entry) = CACHE_STORES.iter().find(|entry| entry.name == name) {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = CACHE_STORES.iter().map(|entry| entry.name).collect();
    Err(format!(
        "Unknown cache store '{}'. Available stores: {:?}",
        name, available
    ))
}

/// List all registered cache stores as (name, description) pairs
pub fn list_cache_stores() -> Vec<(&'static str, &'static str)> {
    CACHE_STORES
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
