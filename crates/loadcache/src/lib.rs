//! # loadcache
//!
//! A write-behind, read-through cache for batching data loaders.
//!
//! A data loader asks the cache before computing a value and hands the
//! cache its pending result afterwards. Reads go straight to the store.
//! Writes return immediately; a background task waits for the pending
//! value to resolve and stores it with a TTL. Store failures never reach
//! the loader: they are logged and read as misses.
//!
//! ## Example
//!
//! ```ignore
//! use loadcache::{ConfigLoader, LoaderCache, Pending, RedisLoaderCache, init_logging};
//!
//! let config = ConfigLoader::new().load()?;
//! init_logging(&config.logging)?;
//!
//! let users: RedisLoaderCache<u64, User> = RedisLoaderCache::from_config(&config)?;
//! match users.get(&42).await {
//!     Some(hit) => hit.resolve(1).await?,
//!     None => {
//!         let (pending, user) = load_user(42);
//!         users.set(&42, pending);
//!         user.await?
//!     }
//! };
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Contracts and value types (`LoaderCache`, `CacheStore`, `Pending`, `Cacheable`)
//! - `providers` - Store backends (Redis, Moka, Null)
//! - `infrastructure` - Configuration, logging, and the `RedisLoaderCache` adapter

/// Domain layer - contracts and value types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use loadcache_domain::*;
}

/// Store backends
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use loadcache_providers::*;
}

/// Infrastructure layer - config, logging, and the adapter
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use loadcache_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the adapter and its configuration at the crate root
pub use infrastructure::{
    CacheBackend, CacheConfig, ClearScope, ConfigLoader, LoggingConfig, RedisConfig,
    RedisLoaderCache, WriteBehind, create_cache_store, init_logging,
};
