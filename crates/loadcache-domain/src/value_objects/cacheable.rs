//! Which resolved values are worth persisting
//!
//! A resolved value that is "empty" is not written to the store: a later
//! `get` stays a miss and the loader computes it again. Types opt in with an
//! empty impl, which treats every value as cacheable:
//!
//! ```
//! use loadcache_domain::Cacheable;
//!
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct User {
//!     id: u64,
//! }
//!
//! impl Cacheable for User {}
//!
//! assert!(User { id: 0 }.is_cacheable());
//! assert!(!Option::<User>::None.is_cacheable());
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// A value the loader cache can serialize and persist
pub trait Cacheable: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// `false` for empty results that should not be written
    fn is_cacheable(&self) -> bool {
        true
    }
}

impl<T: Cacheable> Cacheable for Option<T> {
    fn is_cacheable(&self) -> bool {
        self.as_ref().is_some_and(Cacheable::is_cacheable)
    }
}

impl<T: Cacheable> Cacheable for Box<T> {
    fn is_cacheable(&self) -> bool {
        (**self).is_cacheable()
    }
}

impl Cacheable for String {
    fn is_cacheable(&self) -> bool {
        !self.is_empty()
    }
}

impl Cacheable for bool {
    fn is_cacheable(&self) -> bool {
        *self
    }
}

impl Cacheable for () {
    fn is_cacheable(&self) -> bool {
        false
    }
}

impl<T: Cacheable> Cacheable for Vec<T> {
    fn is_cacheable(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Cacheable> Cacheable for VecDeque<T> {
    fn is_cacheable(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> Cacheable for HashMap<K, V>
where
    K: Cacheable + Eq + std::hash::Hash,
    V: Cacheable,
{
    fn is_cacheable(&self) -> bool {
        !self.is_empty()
    }
}

impl<K: Cacheable + Ord, V: Cacheable> Cacheable for BTreeMap<K, V> {
    fn is_cacheable(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Cacheable + Eq + std::hash::Hash> Cacheable for HashSet<T> {
    fn is_cacheable(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Cacheable + Ord> Cacheable for BTreeSet<T> {
    fn is_cacheable(&self) -> bool {
        !self.is_empty()
    }
}

macro_rules! zero_is_empty {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Cacheable for $ty {
                fn is_cacheable(&self) -> bool {
                    *self != $zero
                }
            }
        )*
    };
}

zero_is_empty!(
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    f32 => 0.0, f64 => 0.0,
);

macro_rules! tuple_is_cacheable {
    ($($name:ident),+) => {
        impl<$($name: Cacheable),+> Cacheable for ($($name,)+) {}
    };
}

tuple_is_cacheable!(A, B);
tuple_is_cacheable!(A, B, C);
tuple_is_cacheable!(A, B, C, D);
