//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Caching-contract constants are defined in `loadcache_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Environment variable prefix for configuration (`CACHE_TTL`, `CACHE_REDIS_HOST`, ...)
pub const CONFIG_ENV_PREFIX: &str = "CACHE";

/// Environment variable holding a full `tracing` filter directive
pub const LOG_FILTER_ENV_VAR: &str = "LOADCACHE_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ============================================================================
// REDIS CONNECTION CONSTANTS
// ============================================================================

/// Default Redis host
pub const DEFAULT_REDIS_HOST: &str = "localhost";

/// Default Redis port
pub const DEFAULT_REDIS_PORT: u16 = 6379;

/// Default Redis logical database index
pub const DEFAULT_REDIS_DB: i64 = 0;
