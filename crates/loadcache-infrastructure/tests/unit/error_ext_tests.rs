//! Error context extension tests

use loadcache_infrastructure::error_ext::ErrorContext;
use std::error::Error as _;
use std::io;

fn io_failure() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"))
}

#[test]
fn test_codec_context() {
    let err = "x".parse::<u32>().codec_context("Bad payload").unwrap_err();

    assert!(err.is_codec());
}

#[test]
fn test_config_context() {
    let err = io_failure().config_context("Failed to read config").unwrap_err();

    assert!(err.to_string().contains("Failed to read config: refused"));
    assert!(err.source().is_some());
    assert!(matches!(
        err,
        loadcache_domain::Error::Configuration { .. }
    ));
}
