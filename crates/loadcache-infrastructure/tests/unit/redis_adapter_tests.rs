//! Adapter tests over the Redis store
//!
//! Tests marked with `skip_if_no_redis!` need a Redis server; start one with
//! `docker run -p 6379:6379 redis`.

use crate::test_utils::{User, billing, user};
use loadcache_domain::ports::{CacheStore, LoaderCache};
use loadcache_domain::value_objects::{Namespace, Pending};
use loadcache_infrastructure::cache::RedisLoaderCache;
use loadcache_infrastructure::config::{CacheConfig, RedisConfig};
use loadcache_providers::cache::RedisCacheStore;
use std::sync::Arc;
use std::time::Duration;

/// Get Redis URL from environment or default to localhost
fn get_redis_url() -> String {
    std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string())
}

/// Check if Redis is available
async fn is_redis_available() -> bool {
    let Ok(store) = RedisCacheStore::new(&get_redis_url()) else {
        return false;
    };
    store
        .with_connect_timeout(Duration::from_millis(500))
        .read("loadcache:probe")
        .await
        .is_ok()
}

/// Helper to skip test if Redis is not available
macro_rules! skip_if_no_redis {
    () => {
        if !is_redis_available().await {
            eprintln!("Skipping test: Redis not available at {}", get_redis_url());
            return;
        }
    };
}

fn redis_store() -> Arc<RedisCacheStore> {
    Arc::new(RedisCacheStore::new(&get_redis_url()).unwrap())
}

fn unique_namespace(test: &str) -> Namespace {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    Namespace::new(format!("loadcache-test-{test}-{nanos}")).unwrap()
}

fn unreachable_config() -> CacheConfig {
    CacheConfig {
        redis: RedisConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            connect_timeout_ms: 200,
            ..RedisConfig::default()
        },
        ..CacheConfig::default()
    }
}

#[tokio::test]
async fn test_from_config_does_not_connect() {
    let cache = RedisLoaderCache::<u64, User>::from_config(&unreachable_config());

    assert!(cache.is_ok());
}

#[tokio::test]
async fn test_unreachable_redis_reads_as_miss() {
    let cache: RedisLoaderCache<u64, User> =
        RedisLoaderCache::from_config(&unreachable_config()).unwrap();

    assert!(cache.get(&1).await.is_none());
    assert_eq!(cache.stats().misses, 1);
}

#[tokio::test]
async fn test_unreachable_redis_contains_write_failures() {
    let cache: RedisLoaderCache<u64, User> =
        RedisLoaderCache::from_config(&unreachable_config()).unwrap();

    cache.set_tracked(&1, Pending::ready(user(1, "alice"))).wait().await;
    cache.delete(&1).await;
    cache.clear().await;

    let stats = cache.stats();
    assert_eq!(stats.failures, 1);
    assert_eq!(stats.writes, 0);
}

#[tokio::test]
async fn test_redis_round_trip() {
    skip_if_no_redis!();

    let cache: RedisLoaderCache<u64, User> = RedisLoaderCache::new(redis_store())
        .unwrap()
        .with_namespace(unique_namespace("round-trip"));

    cache.set_tracked(&1, Pending::ready(user(1, "alice"))).wait().await;

    match cache.get(&1).await {
        Some(Pending::Ready(Ok(found))) => assert_eq!(found, user(1, "alice")),
        other => panic!("expected a cached user, got {other:?}"),
    }

    cache.delete(&1).await;
    assert!(cache.get(&1).await.is_none());
}

#[tokio::test]
async fn test_redis_entries_use_namespaced_keys() {
    skip_if_no_redis!();

    let store = redis_store();
    let namespace = unique_namespace("keys");
    let cache: RedisLoaderCache<str, User> = RedisLoaderCache::new(store.clone())
        .unwrap()
        .with_namespace(namespace.clone());

    cache.set_tracked("alice", Pending::ready(user(1, "alice"))).wait().await;

    let raw = store.read(&namespace.key_for("alice")).await.unwrap();
    assert!(raw.is_some());

    cache.clear().await;
}

#[tokio::test]
async fn test_redis_ttl_expiry() {
    skip_if_no_redis!();

    let cache: RedisLoaderCache<u64, User> = RedisLoaderCache::new(redis_store())
        .unwrap()
        .with_namespace(unique_namespace("ttl"))
        .with_ttl(Duration::from_secs(1));

    cache.set_tracked(&1, Pending::ready(user(1, "alice"))).wait().await;
    assert!(cache.get(&1).await.is_some());

    tokio::time::sleep(Duration::from_millis(2100)).await;
    assert!(cache.get(&1).await.is_none());
}

#[tokio::test]
async fn test_redis_clear_is_namespace_scoped() {
    skip_if_no_redis!();

    let store = redis_store();
    let users: RedisLoaderCache<u64, User> = RedisLoaderCache::new(store.clone())
        .unwrap()
        .with_namespace(unique_namespace("users"));
    let accounts: RedisLoaderCache<u64, billing::Account> = RedisLoaderCache::new(store.clone())
        .unwrap()
        .with_namespace(unique_namespace("accounts"));

    users.set_tracked(&1, Pending::ready(user(1, "alice"))).wait().await;
    accounts
        .set_tracked(&1, Pending::ready(billing::Account { balance_cents: 10 }))
        .wait()
        .await;

    users.clear().await;

    assert!(users.get(&1).await.is_none());
    assert!(accounts.get(&1).await.is_some());

    accounts.clear().await;
}
