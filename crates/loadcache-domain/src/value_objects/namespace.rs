//! Key namespacing for cached item types
//!
//! Every adapter owns one [`Namespace`], derived once from the value type it
//! caches. Store keys are built as `"{namespace}:{key}"`.
//!
//! No escaping is applied. A logical key that itself contains `:` can make
//! two different `(namespace, key)` pairs render to the same store key;
//! callers must keep their key string forms unambiguous.
//!
//! Namespace-scoped clearing removes every key starting with
//! `"{namespace}:"`. Explicit names therefore may not contain `:`, since
//! `users:admin` would live inside the key space of `users`. Two type-derived
//! names cannot nest this way, as Rust forbids a type and a module of the same
//! path. An explicit name equal to a crate or module name (`users` next to
//! `users::Account`) still overlaps and must be avoided.

use crate::constants::NAMESPACE_SEPARATOR;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store key prefix for one logical item type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Namespace(String);

impl Namespace {
    /// Namespace derived from the fully-qualified name of `T`
    ///
    /// ```
    /// use loadcache_domain::Namespace;
    ///
    /// let ns = Namespace::of::<String>();
    /// assert_eq!(ns.as_str(), "alloc::string::String");
    /// ```
    pub fn of<T: ?Sized>() -> Self {
        Self(std::any::type_name::<T>().to_string())
    }

    /// Explicit namespace
    ///
    /// Fails if `name` is empty or contains the `:` separator.
    ///
    /// ```
    /// use loadcache_domain::Namespace;
    ///
    /// assert!(Namespace::new("users").is_ok());
    /// assert!(Namespace::new("users:admin").is_err());
    /// ```
    pub fn new<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::configuration("Namespace cannot be empty"));
        }
        if name.contains(NAMESPACE_SEPARATOR) {
            return Err(Error::configuration(format!(
                "Namespace '{}' cannot contain '{}'",
                name, NAMESPACE_SEPARATOR
            )));
        }
        Ok(Self(name))
    }

    /// The namespace string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the store key for a logical key
    pub fn key_for<K: fmt::Display + ?Sized>(&self, key: &K) -> String {
        format!("{}{}{}", self.0, NAMESPACE_SEPARATOR, key)
    }

    /// Literal prefix shared by every store key under this namespace
    pub fn key_prefix(&self) -> String {
        format!("{}{}", self.0, NAMESPACE_SEPARATOR)
    }

    /// Whether a store key belongs to this namespace
    pub fn owns(&self, store_key: &str) -> bool {
        store_key
            .strip_prefix(self.0.as_str())
            .is_some_and(|rest| rest.starts_with(NAMESPACE_SEPARATOR))
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Namespace {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
