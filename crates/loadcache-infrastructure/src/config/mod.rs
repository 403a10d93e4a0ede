//! Configuration management
//!
//! Layered configuration: compiled-in defaults, an optional TOML file, then
//! `CACHE_*` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CacheBackend, CacheConfig, ClearScope, LoggingConfig, RedisConfig};
