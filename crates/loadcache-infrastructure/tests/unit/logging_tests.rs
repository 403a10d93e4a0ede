//! Logging setup tests

use loadcache_infrastructure::logging::{LoggingConfig, init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn test_parse_invalid_log_level() {
    let err = parse_log_level("loud").unwrap_err();

    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_init_logging_rejects_bad_level() {
    let config = LoggingConfig {
        level: "loud".to_string(),
        json_format: false,
    };

    assert!(init_logging(&config).is_err());
}

#[test]
fn test_init_logging_installs_once() {
    let config = LoggingConfig::default();

    let _ = init_logging(&config);

    assert!(init_logging(&config).is_err());
}
