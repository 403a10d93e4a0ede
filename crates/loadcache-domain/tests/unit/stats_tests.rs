//! Tests for cache statistics

use loadcache_domain::CacheStats;

#[test]
fn test_hit_rate_without_reads_is_zero() {
    assert_eq!(CacheStats::new().calculate_hit_rate(), 0.0);
}

#[test]
fn test_hit_rate_from_counts() {
    let stats = CacheStats {
        hits: 1,
        misses: 3,
        ..CacheStats::default()
    };
    assert_eq!(stats.calculate_hit_rate(), 0.25);
}

#[test]
fn test_stats_serialize_to_json() {
    let stats = CacheStats {
        writes: 2,
        ..CacheStats::default()
    };
    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(json["writes"], 2);
    assert_eq!(json["hits"], 0);
}
