//! Redis connection configuration types

use crate::constants::{DEFAULT_REDIS_DB, DEFAULT_REDIS_HOST, DEFAULT_REDIS_PORT};
use loadcache_providers::constants::REDIS_CONNECT_TIMEOUT_MS;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::time::Duration;
use urlencoding::encode;

/// Redis connection settings
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Server hostname
    pub host: String,

    /// Server port
    pub port: u16,

    /// Logical database index
    pub db: i64,

    /// ACL username
    #[serde(deserialize_with = "optional_text")]
    pub username: Option<String>,

    /// Password
    #[serde(deserialize_with = "optional_text")]
    pub password: Option<String>,

    /// Connection establishment limit in milliseconds
    pub connect_timeout_ms: u64,
}

impl RedisConfig {
    /// Connection URL with percent-encoded credentials
    ///
    /// ```
    /// use loadcache_infrastructure::config::RedisConfig;
    ///
    /// let config = RedisConfig {
    ///     password: Some("p@ss".to_string()),
    ///     ..RedisConfig::default()
    /// };
    /// assert_eq!(config.connection_url(), "redis://:p%40ss@localhost:6379/0");
    /// ```
    pub fn connection_url(&self) -> String {
        let auth = match (&self.username, &self.password) {
            (Some(user), Some(pass)) => format!("{}:{}@", encode(user), encode(pass)),
            (None, Some(pass)) => format!(":{}@", encode(pass)),
            (Some(user), None) => format!("{}@", encode(user)),
            (None, None) => String::new(),
        };
        format!("redis://{}{}:{}/{}", auth, self.url_host(), self.port, self.db)
    }

    /// Host as it appears in a URL, IPv6 literals bracketed
    fn url_host(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        }
    }

    /// Connection establishment limit
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_REDIS_HOST.to_string(),
            port: DEFAULT_REDIS_PORT,
            db: DEFAULT_REDIS_DB,
            username: None,
            password: None,
            connect_timeout_ms: REDIS_CONNECT_TIMEOUT_MS,
        }
    }
}

/// Credentials written as bare numbers (`password = 123456`) still read as text.
fn optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(Option::<Text>::deserialize(deserializer)?.map(|text| match text {
        Text::Str(s) => s,
        Text::Unsigned(n) => n.to_string(),
        Text::Signed(n) => n.to_string(),
        Text::Float(n) => n.to_string(),
        Text::Bool(b) => b.to_string(),
    }))
}

// Keeps the password out of logs.
impl fmt::Debug for RedisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("db", &self.db)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .finish()
    }
}
