//! Value objects shared by every layer
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Namespace`] | Store key prefix derived from a cached type |
//! | [`Pending`] | Handle to a value that may not be materialized yet |
//! | [`Cacheable`] | Serializable value with an emptiness rule |
//! | [`CacheStats`] | Operation counters snapshot |

/// Cacheable values and emptiness
pub mod cacheable;
/// Key namespacing
pub mod namespace;
/// Pending values and chain draining
pub mod pending;
/// Operation statistics
pub mod stats;

pub use cacheable::Cacheable;
pub use namespace::Namespace;
pub use pending::Pending;
pub use stats::CacheStats;
