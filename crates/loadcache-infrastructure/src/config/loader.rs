//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values.
//!
//! Environment variables keep the flat names deployments already use:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `CACHE_REDIS_HOST` | `redis.host` |
//! | `CACHE_REDIS_PORT` | `redis.port` |
//! | `CACHE_REDIS_DB` | `redis.db` |
//! | `CACHE_REDIS_USERNAME` | `redis.username` |
//! | `CACHE_REDIS_PASSWORD` | `redis.password` |
//! | `CACHE_REDIS_CONNECT_TIMEOUT_MS` | `redis.connect_timeout_ms` |
//! | `CACHE_TTL` | `ttl` |
//! | `CACHE_BACKEND` | `backend` |
//! | `CACHE_CLEAR_SCOPE` | `clear_scope` |
//! | `CACHE_MAX_CHAIN_DEPTH` | `max_chain_depth` |
//! | `CACHE_MEMORY_CAPACITY` | `memory_capacity` |
//! | `CACHE_LOG_LEVEL` | `logging.level` |
//! | `CACHE_LOG_JSON` | `logging.json_format` |
//!
//! Credentials are taken verbatim: `CACHE_REDIS_PASSWORD=007` is the
//! string `"007"`, never the number 7.

use crate::config::{CacheBackend, CacheConfig};
use crate::constants::CONFIG_ENV_PREFIX;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use loadcache_domain::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Variables read as raw strings instead of parsed values
const CREDENTIAL_ENV_KEYS: [(&str, &str); 2] = [
    ("REDIS_USERNAME", "redis.username"),
    ("REDIS_PASSWORD", "redis.password"),
];

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `CacheConfig::default()`
    /// 2. TOML configuration file (if set and present)
    /// 3. Environment variables with prefix (e.g., `CACHE_REDIS_PORT`)
    pub fn load(&self) -> Result<CacheConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(CacheConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix))
                .ignore(&["REDIS_USERNAME", "REDIS_PASSWORD"])
                .map(|key| env_key_path(key.as_str()).into()),
        );

        for (suffix, path) in CREDENTIAL_ENV_KEYS {
            if let Ok(value) = std::env::var(format!("{}_{}", self.env_prefix, suffix)) {
                figment = figment.merge(Serialized::default(path, value));
            }
        }

        let config: CacheConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_cache_config(&config)?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &CacheConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config)
            .config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .config_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

/// Map an unprefixed environment key to its configuration path
///
/// `REDIS_*` keys nest under `redis`, `LOG_LEVEL` and `LOG_JSON` under
/// `logging`; everything else is a top-level field.
pub fn env_key_path(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    if let Some(field) = key.strip_prefix("redis_") {
        return format!("redis.{}", field);
    }
    match key.as_str() {
        "log_level" => "logging.level".to_string(),
        "log_json" => "logging.json_format".to_string(),
        _ => key,
    }
}

/// Validate cache configuration
pub fn validate_cache_config(config: &CacheConfig) -> Result<()> {
    if config.ttl == 0 {
        return Err(Error::configuration("Cache TTL cannot be 0"));
    }
    if config.max_chain_depth == 0 {
        return Err(Error::configuration(
            "Maximum pending chain depth cannot be 0",
        ));
    }
    match config.backend {
        CacheBackend::Redis => {
            if config.redis.host.trim().is_empty() {
                return Err(Error::configuration("Redis host cannot be empty"));
            }
            if config.redis.port == 0 {
                return Err(Error::configuration("Redis port cannot be 0"));
            }
            if config.redis.db < 0 {
                return Err(Error::configuration(format!(
                    "Redis database index cannot be negative: {}",
                    config.redis.db
                )));
            }
            if config.redis.connect_timeout_ms == 0 {
                return Err(Error::configuration(
                    "Redis connect timeout cannot be 0",
                ));
            }
        }
        CacheBackend::Memory => {
            if config.memory_capacity == 0 {
                return Err(Error::configuration(
                    "Memory store capacity cannot be 0",
                ));
            }
        }
        CacheBackend::Null => {}
    }
    parse_log_level(&config.logging.level)?;
    Ok(())
}
