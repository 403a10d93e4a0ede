//! # loadcache - Store Implementations
//!
//! Each store implements the [`CacheStore`] port defined in
//! `loadcache-domain` and registers itself in [`registry::CACHE_STORES`].
//!
//! | Store | Type | Description |
//! |-------|------|-------------|
//! | `RedisCacheStore` | Distributed | Redis with native TTL expiry |
//! | `MokaCacheStore` | Local | In-memory with per-entry expiry |
//! | `NullCacheStore` | Testing | No-op store that disables caching |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! loadcache-providers = { version = "0.1", default-features = false, features = ["cache-redis"] }
//! ```

// Re-export domain types commonly used with providers
pub use loadcache_domain::error::{Error, Result};
pub use loadcache_domain::ports::CacheStore;

/// Provider-specific constants
pub mod constants;

/// Cache store implementations
pub mod cache;

/// Store registry and name-based resolution
pub mod registry;

pub use registry::{CacheStoreConfig, list_cache_stores, resolve_cache_store};
