//! Cache Store Port
//!
//! Port for the key-value backends that hold encoded payloads. Supports a
//! distributed store (Redis), an in-memory store (Moka), and a null store
//! that disables caching.
//!
//! Implementations report failures through [`Result`]; containing those
//! failures is the job of the store gateway that wraps them.

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Cache Store Port
///
/// Stores text-safe payloads under fully namespaced keys.
///
/// # Implementations
///
/// - **Redis**: Distributed store with native TTL expiry
/// - **Moka**: In-memory store with per-entry expiry
/// - **Null**: No-op store
#[async_trait]
pub trait CacheStore: Send + Sync + std::fmt::Debug {
    /// Read the payload stored under `key`
    ///
    /// # Returns
    /// The payload if present, `None` if absent or expired
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `payload` under `key`, replacing any existing entry
    ///
    /// # Arguments
    /// * `key` - The store key
    /// * `payload` - The encoded value
    /// * `ttl` - Expiry; zero stores the entry without expiry
    async fn write(&self, key: &str, payload: &str, ttl: Duration) -> Result<()>;

    /// Delete the entry under `key`
    ///
    /// # Returns
    /// True if an entry was deleted
    async fn remove(&self, key: &str) -> Result<bool>;

    /// Delete every entry in the backing database
    ///
    /// Not scoped to any namespace: entries written by other adapters
    /// sharing the database are erased too.
    async fn clear_all(&self) -> Result<()>;

    /// Delete every entry whose key starts with `prefix`
    ///
    /// # Returns
    /// The number of deleted entries
    async fn clear_prefix(&self, prefix: &str) -> Result<u64>;

    /// Get the name/identifier of this store implementation
    ///
    /// # Returns
    /// A string identifier (e.g., "redis", "moka", "null")
    fn provider_name(&self) -> &str;
}
