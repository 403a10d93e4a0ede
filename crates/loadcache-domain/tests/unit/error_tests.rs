//! Unit tests for domain error types

use loadcache_domain::Error;

#[test]
fn test_store_error() {
    let error = Error::store("Connection refused");
    assert!(error.is_store());
    assert_eq!(error.to_string(), "Store error: Connection refused");
}

#[test]
fn test_store_error_with_source() {
    let error = Error::store_with_source("GET failed", std::io::Error::other("reset"));
    match &error {
        Error::Store { message, source } => {
            assert_eq!(message, "GET failed");
            assert!(source.is_some());
        }
        _ => panic!("Expected Store error"),
    }
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_codec_errors() {
    assert!(Error::codec("bad payload").is_codec());
    let decode_err = base64::DecodeError::InvalidLength(3);
    let error: Error = decode_err.into();
    assert!(error.is_codec());
    assert!(error.to_string().starts_with("Base64 decode error"));
}

#[test]
fn test_resolution_errors() {
    let error = Error::resolution_failed("loader exploded".into());
    assert!(error.is_resolution());
    assert_eq!(error.to_string(), "Resolution error: loader exploded");

    let error = Error::chain_too_deep(32);
    assert!(error.is_resolution());
    assert!(error.to_string().contains("32"));
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("Port cannot be 0");
    assert!(!error.is_store());
    assert_eq!(error.to_string(), "Configuration error: Port cannot be 0");
}
