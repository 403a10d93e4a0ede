//! Cache configuration types

use super::{LoggingConfig, RedisConfig};
use loadcache_domain::constants::{DEFAULT_CACHE_TTL_SECS, DEFAULT_MAX_CHAIN_DEPTH};
use loadcache_providers::constants::MEMORY_DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Store backends
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Distributed store (Redis)
    #[default]
    Redis,
    /// In-process store (Moka)
    Memory,
    /// No store at all; every read misses
    Null,
}

impl CacheBackend {
    /// Registry name of the store backing this variant
    pub fn store_name(&self) -> &'static str {
        match self {
            Self::Redis => "redis",
            Self::Memory => "memory",
            Self::Null => "null",
        }
    }
}

/// What `clear()` removes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClearScope {
    /// Only keys under the adapter's namespace
    #[default]
    Namespace,
    /// The whole store database (`FLUSHDB`)
    Database,
}

/// Loader cache configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Store backend
    pub backend: CacheBackend,

    /// Redis connection settings (for the Redis backend)
    pub redis: RedisConfig,

    /// Entry TTL in seconds
    pub ttl: u64,

    /// Scope of `clear()`
    pub clear_scope: ClearScope,

    /// Deferred steps drained before a pending value is abandoned
    pub max_chain_depth: usize,

    /// Maximum entries (for the memory backend)
    pub memory_capacity: u64,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl CacheConfig {
    /// Entry TTL
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            redis: RedisConfig::default(),
            ttl: DEFAULT_CACHE_TTL_SECS,
            clear_scope: ClearScope::default(),
            max_chain_depth: DEFAULT_MAX_CHAIN_DEPTH,
            memory_capacity: MEMORY_DEFAULT_CAPACITY,
            logging: LoggingConfig::default(),
        }
    }
}
