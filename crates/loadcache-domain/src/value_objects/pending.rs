//! Pending values handed to the cache by the data loader
//!
//! A [`Pending`] is a handle to a computation the cache does not own. It may
//! already hold its outcome, or it may be a future that yields another
//! `Pending` when polled, which allows arbitrarily chained deferral:
//!
//! ```
//! use loadcache_domain::Pending;
//!
//! let inner = Pending::from_future(async { Ok::<_, std::io::Error>(7_u32) });
//! let outer = Pending::chain(async move { inner });
//! let value = futures::executor::block_on(outer.resolve(8)).unwrap();
//! assert_eq!(value, 7);
//! ```

use crate::error::{Error, LoadError, Result};
use futures::FutureExt;
use futures::future::BoxFuture;
use std::fmt;
use std::future::Future;

/// Handle to a value that may not be materialized yet
pub enum Pending<T> {
    /// The outcome is already known
    Ready(std::result::Result<T, LoadError>),
    /// Awaiting this future yields the next step of the chain
    Deferred(BoxFuture<'static, Pending<T>>),
}

impl<T: Send + 'static> Pending<T> {
    /// An already available value
    pub fn ready(value: T) -> Self {
        Self::Ready(Ok(value))
    }

    /// A computation that failed before producing anything
    pub fn failed<E: Into<LoadError>>(error: E) -> Self {
        Self::Ready(Err(error.into()))
    }

    /// A value produced by a fallible future
    pub fn from_future<F, E>(future: F) -> Self
    where
        F: Future<Output = std::result::Result<T, E>> + Send + 'static,
        E: Into<LoadError>,
    {
        Self::Deferred(
            async move {
                match future.await {
                    Ok(value) => Self::Ready(Ok(value)),
                    Err(error) => Self::Ready(Err(error.into())),
                }
            }
            .boxed(),
        )
    }

    /// A future that itself yields another pending value
    pub fn chain<F>(future: F) -> Self
    where
        F: Future<Output = Pending<T>> + Send + 'static,
    {
        Self::Deferred(future.boxed())
    }

    /// Whether the outcome is known without awaiting
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Borrow the value if it is already available and successful
    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Self::Ready(Ok(value)) => Some(value),
            _ => None,
        }
    }

    /// Drain the chain until a concrete value or an error is reached
    ///
    /// At most `max_depth` deferred steps are awaited; one more yields
    /// [`Error::ChainTooDeep`]. Errors raised by the computation are
    /// returned as [`Error::Resolution`].
    pub async fn resolve(self, max_depth: usize) -> Result<T> {
        let mut current = self;
        let mut depth = 0;
        loop {
            match current {
                Self::Ready(Ok(value)) => return Ok(value),
                Self::Ready(Err(error)) => return Err(Error::resolution_failed(error)),
                Self::Deferred(next) => {
                    if depth >= max_depth {
                        return Err(Error::chain_too_deep(max_depth));
                    }
                    depth += 1;
                    current = next.await;
                }
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Pending<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(outcome) => f.debug_tuple("Ready").field(outcome).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}
