//! Write-behind, read-through loader cache
//!
//! [`RedisLoaderCache`] sits between a batching data loader and a cache
//! store. `get` is a plain remote read. `set` hands the loader's pending
//! result to a background task that drains it and writes the final value,
//! so the loader never waits on the store.
//!
//! ## Example
//!
//! ```ignore
//! use loadcache_infrastructure::cache::RedisLoaderCache;
//! use loadcache_infrastructure::config::ConfigLoader;
//! use loadcache_domain::{LoaderCache, Pending};
//!
//! let config = ConfigLoader::new().load()?;
//! let users: RedisLoaderCache<u64, User> = RedisLoaderCache::from_config(&config)?;
//!
//! if users.get(&42).await.is_none() {
//!     users.set(&42, Pending::from_future(fetch_user(42)));
//! }
//! ```

use super::factory::create_cache_store;
use super::gateway::StoreGateway;
use super::resolver::PendingResolver;
use crate::config::{CacheConfig, ClearScope};
use async_trait::async_trait;
use loadcache_domain::error::{Error, Result};
use loadcache_domain::ports::{CacheStore, LoaderCache};
use loadcache_domain::value_objects::{CacheStats, Cacheable, Namespace, Pending};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Loader cache for values of type `V` keyed by `K`
///
/// Store keys are `"{namespace}:{key}"`, with the namespace taken from the
/// type name of `V` unless overridden. Cloning shares the store connection
/// and the statistics.
pub struct RedisLoaderCache<K: ?Sized, V> {
    gateway: StoreGateway,
    namespace: Namespace,
    ttl: Duration,
    clear_scope: ClearScope,
    resolver: PendingResolver,
    runtime: Handle,
    _types: PhantomData<fn(&K) -> V>,
}

impl<K, V> RedisLoaderCache<K, V>
where
    K: fmt::Display + Sync + ?Sized,
    V: Cacheable,
{
    /// Create an adapter over an existing store with default settings
    ///
    /// Must be called from within a Tokio runtime; resolution tasks are
    /// spawned on that runtime.
    pub fn new(store: Arc<dyn CacheStore>) -> Result<Self> {
        Self::with_store(store, &CacheConfig::default())
    }

    /// Create an adapter over an existing store, taking TTL, clear scope,
    /// and chain depth from `config`
    pub fn with_store(store: Arc<dyn CacheStore>, config: &CacheConfig) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| {
            Error::configuration_with_source(
                "RedisLoaderCache must be created inside a Tokio runtime",
                e,
            )
        })?;

        Ok(Self {
            gateway: StoreGateway::new(store),
            namespace: Namespace::of::<V>(),
            ttl: config.ttl(),
            clear_scope: config.clear_scope,
            resolver: PendingResolver::new(config.max_chain_depth),
            runtime,
            _types: PhantomData,
        })
    }

    /// Create an adapter and its store from configuration
    ///
    /// The store does not connect until the first operation, so an
    /// unreachable server is not an error here.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        let store = create_cache_store(config)?;
        Self::with_store(store, config)
    }

    /// Override the entry TTL for this adapter
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Override the namespace derived from the value type
    pub fn with_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = namespace;
        self
    }

    /// Override the scope of `clear()`
    pub fn with_clear_scope(mut self, clear_scope: ClearScope) -> Self {
        self.clear_scope = clear_scope;
        self
    }

    /// Spawn resolution tasks on `runtime` instead of the current one
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = runtime;
        self
    }

    /// The namespace prefixed to every store key
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Entry TTL applied to writes
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Name of the backing store
    pub fn store_name(&self) -> &str {
        self.gateway.store().provider_name()
    }

    /// Snapshot of this adapter's counters
    pub fn stats(&self) -> CacheStats {
        self.gateway.stats().snapshot()
    }

    /// Like [`LoaderCache::set`], returning a handle to the background write
    pub fn set_tracked(&self, key: &K, value: Pending<V>) -> WriteBehind {
        let store_key = self.namespace.key_for(key);
        let gateway = self.gateway.clone();
        let resolver = self.resolver;
        let ttl = self.ttl;

        let handle = self.runtime.spawn(async move {
            match resolver.drain(value).await {
                Ok(value) if value.is_cacheable() => {
                    gateway.write(&store_key, &value, ttl).await;
                }
                Ok(_) => {
                    debug!(key = %store_key, "Skipping set cache value (no value returned)");
                    gateway.stats().record_skipped();
                }
                Err(e) => {
                    warn!(key = %store_key, error = %e, "Error occurred while resolving pending value");
                    gateway.stats().record_failure();
                }
            }
        });

        WriteBehind { handle }
    }
}

#[async_trait]
impl<K, V> LoaderCache<K, V> for RedisLoaderCache<K, V>
where
    K: fmt::Display + Sync + ?Sized,
    V: Cacheable,
{
    async fn get(&self, key: &K) -> Option<Pending<V>> {
        let store_key = self.namespace.key_for(key);
        self.gateway.read::<V>(&store_key).await.map(Pending::ready)
    }

    fn set(&self, key: &K, value: Pending<V>) {
        self.set_tracked(key, value);
    }

    async fn delete(&self, key: &K) {
        let store_key = self.namespace.key_for(key);
        self.gateway.remove(&store_key).await;
    }

    async fn clear(&self) {
        match self.clear_scope {
            ClearScope::Namespace => self.gateway.clear_namespace(&self.namespace).await,
            ClearScope::Database => self.gateway.clear_all().await,
        }
    }
}

impl<K: ?Sized, V> Clone for RedisLoaderCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            namespace: self.namespace.clone(),
            ttl: self.ttl,
            clear_scope: self.clear_scope,
            resolver: self.resolver,
            runtime: self.runtime.clone(),
            _types: PhantomData,
        }
    }
}

impl<K: ?Sized, V> fmt::Debug for RedisLoaderCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisLoaderCache")
            .field("store", self.gateway.store())
            .field("namespace", &self.namespace)
            .field("ttl", &self.ttl)
            .field("clear_scope", &self.clear_scope)
            .field("max_chain_depth", &self.resolver.max_chain_depth())
            .finish()
    }
}

/// Handle to one background resolve-and-write task
///
/// Dropping the handle detaches the task; it keeps running.
#[derive(Debug)]
pub struct WriteBehind {
    handle: JoinHandle<()>,
}

impl WriteBehind {
    /// Whether the task has finished
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the task to finish
    pub async fn wait(self) {
        if let Err(e) = self.handle.await {
            warn!(error = %e, "Write-behind task did not complete");
        }
    }
}
