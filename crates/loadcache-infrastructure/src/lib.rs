//! # Infrastructure Layer
//!
//! Wires the domain contracts to concrete stores: configuration, logging,
//! payload encoding, and the write-behind loader cache adapter.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | `RedisLoaderCache` and its building blocks |
//! | [`config`] | Figment-based configuration loading |
//! | [`logging`] | Tracing subscriber setup |
//! | [`error_ext`] | Error context extensions |
//! | [`constants`] | Infrastructure defaults |

pub mod cache;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use cache::{RedisLoaderCache, WriteBehind, create_cache_store};
pub use config::{CacheBackend, CacheConfig, ClearScope, ConfigLoader, LoggingConfig, RedisConfig};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
