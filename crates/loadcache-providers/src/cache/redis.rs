//! Redis distributed cache store
//!
//! Distributed store using Redis as the backend. Entries expire through
//! Redis' native TTL, so several processes can share one cache.
//!
//! ## Features
//!
//! - One multiplexed connection per store, shared by all callers
//! - Lazy connection: creating the store never touches the network
//! - Reconnection on the next command after an I/O failure
//! - Namespace-scoped clearing through `SCAN` + `DEL`
//!
//! ## Example
//!
//! ```ignore
//! use loadcache_providers::cache::RedisCacheStore;
//!
//! let store = RedisCacheStore::new("redis://localhost:6379/0")?;
//! // Or with host/port
//! let store = RedisCacheStore::with_host_port("localhost", 6379)?;
//! ```

use crate::constants::{REDIS_CONNECT_TIMEOUT_MS, REDIS_DEFAULT_URL, REDIS_SCAN_BATCH_SIZE};
use crate::registry::{CACHE_STORES, CacheStoreConfig, CacheStoreEntry};
use async_trait::async_trait;
use loadcache_domain::error::{Error, Result};
use loadcache_domain::ports::CacheStore;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client, RedisError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Redis cache store
///
/// Cloning shares the underlying connection.
#[derive(Clone)]
pub struct RedisCacheStore {
    client: Client,
    connection: Arc<RwLock<Option<MultiplexedConnection>>>,
    connect_timeout: Duration,
    server: String,
}

impl RedisCacheStore {
    /// Create a new Redis cache store from a connection string
    ///
    /// Only the URL is validated here; the connection is established on the
    /// first command.
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379/0")
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| {
            Error::store_with_source(format!("Failed to create Redis client: {}", e), e)
        })?;

        Ok(Self {
            client,
            connection: Arc::new(RwLock::new(None)),
            connect_timeout: Duration::from_millis(REDIS_CONNECT_TIMEOUT_MS),
            server: redact_credentials(connection_string),
        })
    }

    /// Create a new Redis cache store with host and port
    ///
    /// # Arguments
    ///
    /// * `host` - Redis server hostname
    /// * `port` - Redis server port
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("redis://{}:{}", host, port))
    }

    /// Limit the time spent establishing the connection
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// The server URL with credentials removed
    pub fn server_address(&self) -> &str {
        &self.server
    }

    /// Get the shared connection, establishing it if needed
    async fn connection(&self) -> Result<MultiplexedConnection> {
        if let Some(conn) = self.connection.read().await.as_ref() {
            return Ok(conn.clone());
        }

        let mut slot = self.connection.write().await;
        if let Some(conn) = slot.as_ref() {
            return Ok(conn.clone());
        }

        let conn = match tokio::time::timeout(
            self.connect_timeout,
            self.client.get_multiplexed_async_connection(),
        )
        .await
        {
            Ok(Ok(conn)) => conn,
            Ok(Err(e)) => {
                return Err(Error::store_with_source(
                    format!("Redis connection to {} failed: {}", self.server, e),
                    e,
                ));
            }
            Err(_) => {
                return Err(Error::store(format!(
                    "Redis connection to {} timed out after {:?}",
                    self.server, self.connect_timeout
                )));
            }
        };

        debug!(server = %self.server, "Redis connection established");
        *slot = Some(conn.clone());
        Ok(conn)
    }

    /// Convert a command failure, dropping the connection if it is broken
    async fn command_failed(&self, command: &str, e: RedisError) -> Error {
        if e.is_io_error() || e.is_connection_dropped() {
            warn!(server = %self.server, command, "Redis connection lost; reconnecting on next command");
            *self.connection.write().await = None;
        }
        Error::store_with_source(format!("Redis {} failed: {}", command, e), e)
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;

        match conn.get::<_, Option<String>>(key).await {
            Ok(value) => Ok(value),
            Err(e) => Err(self.command_failed("GET", e).await),
        }
    }

    async fn write(&self, key: &str, payload: &str, ttl: Duration) -> Result<()> {
        let mut conn = self.connection().await?;

        let ttl_seconds = ttl_to_seconds(ttl);
        let result: redis::RedisResult<()> = if ttl_seconds > 0 {
            conn.set_ex(key, payload, ttl_seconds).await
        } else {
            conn.set(key, payload).await
        };

        match result {
            Ok(()) => Ok(()),
            Err(e) => Err(self.command_failed("SET", e).await),
        }
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;

        match conn.del::<_, i64>(key).await {
            Ok(count) => Ok(count > 0),
            Err(e) => Err(self.command_failed("DEL", e).await),
        }
    }

    async fn clear_all(&self) -> Result<()> {
        let mut conn = self.connection().await?;

        match redis::cmd("FLUSHDB").query_async::<()>(&mut conn).await {
            Ok(()) => Ok(()),
            Err(e) => Err(self.command_failed("FLUSHDB", e).await),
        }
    }

    async fn clear_prefix(&self, prefix: &str) -> Result<u64> {
        let mut conn = self.connection().await?;

        let pattern = format!("{}*", escape_glob(prefix));
        let mut cursor: u64 = 0;
        let mut deleted: u64 = 0;
        loop {
            let scanned = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(REDIS_SCAN_BATCH_SIZE)
                .query_async::<(u64, Vec<String>)>(&mut conn)
                .await;
            let (next, keys) = match scanned {
                Ok(page) => page,
                Err(e) => return Err(self.command_failed("SCAN", e).await),
            };

            if !keys.is_empty() {
                match redis::cmd("DEL").arg(&keys).query_async::<u64>(&mut conn).await {
                    Ok(count) => deleted += count,
                    Err(e) => return Err(self.command_failed("DEL", e).await),
                }
            }

            if next == 0 {
                break;
            }
            cursor = next;
        }

        Ok(deleted)
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheStore")
            .field("server", &self.server)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// Whole seconds for `SET EX`, rounding partial seconds up
fn ttl_to_seconds(ttl: Duration) -> u64 {
    ttl.as_secs() + u64::from(ttl.subsec_nanos() > 0)
}

/// Escape Redis glob metacharacters so `prefix` matches literally
fn escape_glob(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\' | '^') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Hide `user:password@` in a connection URL
fn redact_credentials(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***@{}", &url[..scheme_end], &url[at + 1..])
        }
        _ => url.to_string(),
    }
}

/// Factory function for creating Redis cache store instances.
fn redis_store_factory(config: &CacheStoreConfig) -> std::result::Result<Arc<dyn CacheStore>, String> {
    let uri = config.uri.as_deref().unwrap_or(REDIS_DEFAULT_URL);

    let mut store =
        RedisCacheStore::new(uri).map_err(|e| format!("Failed to create Redis store: {e}"))?;
    if let Some(timeout) = config.connect_timeout {
        store = store.with_connect_timeout(timeout);
    }

    Ok(Arc::new(store))
}

#[linkme::distributed_slice(CACHE_STORES)]
static REDIS_STORE: CacheStoreEntry = CacheStoreEntry {
    name: "redis",
    description: "Redis distributed store",
    factory: redis_store_factory,
};
