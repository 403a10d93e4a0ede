//! Loader cache adapter
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapter`] | `RedisLoaderCache`, the `LoaderCache` implementation |
//! | [`codec`] | bincode + base64 payload encoding |
//! | [`gateway`] | Store access that logs and contains failures |
//! | [`resolver`] | Drains pending value chains |
//! | [`factory`] | Store selection from configuration |
//! | [`stats`] | Operation counters |

pub mod adapter;
pub mod codec;
pub mod factory;
pub mod gateway;
pub mod resolver;
pub mod stats;

pub use adapter::{RedisLoaderCache, WriteBehind};
pub use codec::PayloadCodec;
pub use factory::create_cache_store;
pub use gateway::StoreGateway;
pub use resolver::PendingResolver;
pub use stats::StatsRecorder;
