//! Loader Cache Port
//!
//! The capability contract a data-loading layer expects from its cache:
//! ask with `get` before computing, hand over the eventual result with
//! `set` after computing. Registering an implementation with a particular
//! loader framework is a thin binding outside this crate.

use crate::value_objects::Pending;
use async_trait::async_trait;

/// Cache consulted by a per-request data loader
///
/// Every operation is best effort. Failures of the backing store, of
/// serialization, or of the pending computation are never reported to the
/// caller: a failing cache behaves like an absent one.
///
/// # Example
///
/// ```ignore
/// use loadcache_domain::{LoaderCache, Pending};
///
/// if let Some(hit) = cache.get(&user_id).await {
///     return hit;
/// }
/// let pending = Pending::from_future(load_user(user_id));
/// cache.set(&user_id, pending);
/// ```
#[async_trait]
pub trait LoaderCache<K, V>: Send + Sync
where
    K: Sync + ?Sized,
    V: Send + 'static,
{
    /// Look up a value
    ///
    /// # Returns
    /// An already available [`Pending`] on a hit; `None` on a miss or on
    /// any internal error. The two cases are indistinguishable.
    async fn get(&self, key: &K) -> Option<Pending<V>>;

    /// Store the eventual outcome of `value` under `key`
    ///
    /// Returns immediately. The value is drained and written in the
    /// background; empty or failed outcomes are not written. No ordering is
    /// guaranteed against later `get` calls.
    fn set(&self, key: &K, value: Pending<V>);

    /// Remove the entry for `key`
    async fn delete(&self, key: &K);

    /// Remove every entry this cache is responsible for
    async fn clear(&self);
}
