//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outer layers.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`LoaderCache`] | The four-operation contract offered to data loaders |
//! | [`CacheStore`] | Key-value backend holding encoded payloads |

/// Store backend port
pub mod cache_store;
/// Data loader cache port
pub mod loader_cache;

pub use cache_store::CacheStore;
pub use loader_cache::LoaderCache;
