//! Cache Store Implementations
//!
//! ## Store Selection Guide
//!
//! - **Tests / caching disabled**: `NullCacheStore`
//! - **Single process**: `MokaCacheStore`
//! - **Shared between processes**: `RedisCacheStore`

#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;
#[cfg(feature = "cache-redis")]
pub mod redis;

#[cfg(feature = "cache-moka")]
pub use moka::MokaCacheStore;
pub use null::NullCacheStore;
#[cfg(feature = "cache-redis")]
pub use redis::RedisCacheStore;
