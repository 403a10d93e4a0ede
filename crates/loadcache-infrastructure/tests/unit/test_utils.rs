//! Shared fixtures: value types, store doubles, adapter builders

use async_trait::async_trait;
use loadcache_domain::error::{Error, Result};
use loadcache_domain::ports::CacheStore;
use loadcache_domain::value_objects::Cacheable;
use loadcache_infrastructure::cache::RedisLoaderCache;
use loadcache_providers::cache::MokaCacheStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub roles: Vec<String>,
}

impl Cacheable for User {}

pub fn user(id: u64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        roles: vec!["reader".to_string()],
    }
}

pub mod billing {
    use loadcache_domain::value_objects::Cacheable;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Account {
        pub balance_cents: i64,
    }

    impl Cacheable for Account {}
}

pub mod identity {
    use loadcache_domain::value_objects::Cacheable;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Account {
        pub email: String,
    }

    impl Cacheable for Account {}
}

/// Store whose every operation fails
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl CacheStore for FailingStore {
    async fn read(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::store("connection refused"))
    }

    async fn write(&self, _key: &str, _payload: &str, _ttl: Duration) -> Result<()> {
        Err(Error::store("connection refused"))
    }

    async fn remove(&self, _key: &str) -> Result<bool> {
        Err(Error::store("connection refused"))
    }

    async fn clear_all(&self) -> Result<()> {
        Err(Error::store("connection refused"))
    }

    async fn clear_prefix(&self, _prefix: &str) -> Result<u64> {
        Err(Error::store("connection refused"))
    }

    fn provider_name(&self) -> &str {
        "failing"
    }
}

/// In-memory store that counts writes
#[derive(Debug, Default)]
pub struct CountingStore {
    inner: MokaCacheStore,
    writes: AtomicUsize,
}

impl CountingStore {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheStore for CountingStore {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        self.inner.read(key).await
    }

    async fn write(&self, key: &str, payload: &str, ttl: Duration) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.write(key, payload, ttl).await
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        self.inner.remove(key).await
    }

    async fn clear_all(&self) -> Result<()> {
        self.inner.clear_all().await
    }

    async fn clear_prefix(&self, prefix: &str) -> Result<u64> {
        self.inner.clear_prefix(prefix).await
    }

    fn provider_name(&self) -> &str {
        "counting"
    }
}

/// Adapter over a fresh in-memory store
pub fn memory_cache<K, V>() -> RedisLoaderCache<K, V>
where
    K: fmt::Display + Sync + ?Sized,
    V: Cacheable,
{
    RedisLoaderCache::new(Arc::new(MokaCacheStore::new())).unwrap()
}
