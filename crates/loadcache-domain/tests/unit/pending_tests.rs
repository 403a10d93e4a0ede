//! Tests for pending value resolution

use loadcache_domain::{Error, Pending};
use std::time::Duration;

#[tokio::test]
async fn test_ready_value_resolves_without_waiting() {
    let pending = Pending::ready(5_u32);
    assert!(pending.is_ready());
    assert_eq!(pending.as_ready(), Some(&5));
    assert_eq!(pending.resolve(0).await.unwrap(), 5);
}

#[tokio::test]
async fn test_future_value_resolves() {
    let pending = Pending::from_future(async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        Ok::<_, std::io::Error>("loaded".to_string())
    });
    assert!(!pending.is_ready());
    assert_eq!(pending.resolve(4).await.unwrap(), "loaded");
}

#[tokio::test]
async fn test_chained_value_resolves_to_innermost() {
    let innermost = Pending::from_future(async { Ok::<_, std::io::Error>(3_i64) });
    let middle = Pending::chain(async move { innermost });
    let outer = Pending::chain(async move { middle });
    assert_eq!(outer.resolve(8).await.unwrap(), 3);
}

#[tokio::test]
async fn test_failed_computation_is_resolution_error() {
    let pending = Pending::<u32>::from_future(async {
        Err::<u32, _>(std::io::Error::other("backend down"))
    });
    let err = pending.resolve(4).await.unwrap_err();
    assert!(err.is_resolution());
    assert!(err.to_string().contains("backend down"));
}

#[tokio::test]
async fn test_immediate_failure_is_resolution_error() {
    let err = Pending::<u32>::failed("could not schedule")
        .resolve(4)
        .await
        .unwrap_err();
    match err {
        Error::Resolution { message, source } => {
            assert_eq!(message, "could not schedule");
            assert!(source.is_some());
        }
        other => panic!("Expected Resolution error, got {other:?}"),
    }
}

fn chain_of(depth: usize) -> Pending<u32> {
    let mut pending = Pending::ready(1);
    for _ in 0..depth {
        let inner = pending;
        pending = Pending::chain(async move { inner });
    }
    pending
}

#[tokio::test]
async fn test_chain_at_depth_limit_resolves() {
    assert_eq!(chain_of(3).resolve(3).await.unwrap(), 1);
}

#[tokio::test]
async fn test_chain_past_depth_limit_fails() {
    let err = chain_of(4).resolve(3).await.unwrap_err();
    assert!(matches!(err, Error::ChainTooDeep { max_depth: 3 }));
}

#[test]
fn test_debug_hides_future() {
    let deferred = Pending::from_future(async { Ok::<_, std::io::Error>(1_u8) });
    assert_eq!(format!("{deferred:?}"), "Deferred(..)");
    let ready = Pending::ready(1_u8);
    assert!(format!("{ready:?}").starts_with("Ready(Ok(1"));
}
