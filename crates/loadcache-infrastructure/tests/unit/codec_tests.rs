//! Payload codec tests

use crate::test_utils::{User, user};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use loadcache_infrastructure::cache::PayloadCodec;
use std::collections::BTreeMap;

#[test]
fn test_struct_round_trip() {
    let codec = PayloadCodec::new();
    let alice = user(1, "alice");

    let payload = codec.encode(&alice).unwrap();
    let decoded: User = codec.decode(&payload).unwrap();

    assert_eq!(decoded, alice);
}

#[test]
fn test_nested_values_round_trip() {
    let codec = PayloadCodec::new();
    let value: BTreeMap<String, Option<(u8, f64)>> = BTreeMap::from([
        ("present".to_string(), Some((3, 1.5))),
        ("absent".to_string(), None),
    ]);

    let payload = codec.encode(&value).unwrap();

    assert_eq!(codec.decode::<BTreeMap<String, Option<(u8, f64)>>>(&payload).unwrap(), value);
}

#[test]
fn test_payload_is_plain_base64() {
    let payload = PayloadCodec::new().encode(&user(1, "alice")).unwrap();

    assert!(STANDARD.decode(&payload).is_ok());
    assert!(payload.is_ascii());
}

#[test]
fn test_invalid_base64_is_codec_error() {
    let err = PayloadCodec::new().decode::<User>("not base64 !!").unwrap_err();

    assert!(err.is_codec());
}

#[test]
fn test_foreign_payload_is_codec_error() {
    let payload = STANDARD.encode([0xff_u8; 3]);

    let err = PayloadCodec::new().decode::<User>(&payload).unwrap_err();

    assert!(err.is_codec());
    assert!(err.to_string().contains("deserialize"));
}
