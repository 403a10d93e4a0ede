//! # Domain Layer
//!
//! Core types and contracts of the write-behind loader cache. This crate has
//! no I/O: store backends live in `loadcache-providers`, and the adapter that
//! wires everything together lives in `loadcache-infrastructure`.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`constants`] | Defaults that are part of the caching contract |
//! | [`ports`] | `LoaderCache` and `CacheStore` traits |
//! | [`value_objects`] | `Namespace`, `Pending`, `Cacheable`, `CacheStats` |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, LoadError, Result};
pub use ports::{CacheStore, LoaderCache};
pub use value_objects::{CacheStats, Cacheable, Namespace, Pending};
