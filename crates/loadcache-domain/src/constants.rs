//! Domain layer constants
//!
//! Values that define the caching contract itself. Connection and loader
//! defaults live in `loadcache_infrastructure::constants`.

/// Separator between a namespace and a logical key
pub const NAMESPACE_SEPARATOR: &str = ":";

/// Default time-to-live for cache entries in seconds (10 minutes)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;

/// Default maximum number of deferred hops while draining a pending value
pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 32;
