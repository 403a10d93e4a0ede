//! Configuration types module

pub mod cache;
pub mod logging;
pub mod redis;

// Re-export main types
pub use cache::{CacheBackend, CacheConfig, ClearScope};
pub use logging::LoggingConfig;
pub use redis::RedisConfig;
