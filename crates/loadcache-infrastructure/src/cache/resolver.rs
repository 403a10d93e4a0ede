//! Pending value resolver
//!
//! Drains a [`Pending`] chain down to a concrete value with a depth limit.
//! A computation that panics is reported as a resolution error instead of
//! tearing down the task that drives it.

use futures::FutureExt;
use loadcache_domain::constants::DEFAULT_MAX_CHAIN_DEPTH;
use loadcache_domain::error::{Error, Result};
use loadcache_domain::value_objects::Pending;
use std::any::Any;
use std::panic::AssertUnwindSafe;

/// Drives pending values to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingResolver {
    max_chain_depth: usize,
}

impl Default for PendingResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHAIN_DEPTH)
    }
}

impl PendingResolver {
    /// Create a resolver that awaits at most `max_chain_depth` deferred steps
    pub fn new(max_chain_depth: usize) -> Self {
        Self { max_chain_depth }
    }

    /// The configured depth limit
    pub fn max_chain_depth(&self) -> usize {
        self.max_chain_depth
    }

    /// Resolve `pending` to its final value
    pub async fn drain<T: Send + 'static>(&self, pending: Pending<T>) -> Result<T> {
        match AssertUnwindSafe(pending.resolve(self.max_chain_depth))
            .catch_unwind()
            .await
        {
            Ok(outcome) => outcome,
            Err(panic) => Err(Error::resolution(format!(
                "Pending computation panicked: {}",
                panic_message(panic.as_ref())
            ))),
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message
    } else {
        "unknown panic payload"
    }
}
