//! Cache operation statistics

use serde::{Deserialize, Serialize};

/// Snapshot of an adapter's operation counters
///
/// # Example
///
/// ```
/// use loadcache_domain::CacheStats;
///
/// let stats = CacheStats { hits: 3, misses: 1, ..CacheStats::default() };
/// assert_eq!(stats.calculate_hit_rate(), 0.75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CacheStats {
    /// Reads that returned a value
    pub hits: u64,
    /// Reads that found nothing, including failed reads
    pub misses: u64,
    /// Resolved values written to the store
    pub writes: u64,
    /// Resolved values skipped because they were empty
    pub skipped: u64,
    /// Resolutions or writes that failed
    pub failures: u64,
    /// Cache hit rate (0.0 to 1.0)
    pub hit_rate: f64,
}

impl CacheStats {
    /// Create empty cache statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate hit rate from hits and misses
    pub fn calculate_hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}
