//! Provider Constants
//!
//! Constants specific to store implementations. Domain constants live in
//! `loadcache-domain`, loader defaults in `loadcache-infrastructure`.

// ============================================================================
// REDIS STORE CONSTANTS
// ============================================================================

/// Redis URL used when no connection string is configured
pub const REDIS_DEFAULT_URL: &str = "redis://localhost:6379/0";

/// Default time allowed for establishing the Redis connection (2 seconds)
pub const REDIS_CONNECT_TIMEOUT_MS: u64 = 2000;

/// Keys requested per SCAN round trip when clearing a prefix
pub const REDIS_SCAN_BATCH_SIZE: usize = 500;

// ============================================================================
// MEMORY STORE CONSTANTS
// ============================================================================

/// Default maximum number of entries held by the Moka store
pub const MEMORY_DEFAULT_CAPACITY: u64 = 10_000;
