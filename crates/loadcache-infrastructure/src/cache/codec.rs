//! Payload codec
//!
//! Values are serialized with bincode and stored as standard base64 text,
//! so any string-valued store can hold them. Decoding is the exact inverse.
//!
//! bincode is not self-describing: types that rely on
//! `deserialize_any` (untagged enums, `serde_json::Value`) cannot be
//! decoded and will always read as a miss.

use crate::error_ext::ErrorContext;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use loadcache_domain::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Converts values to and from store payloads
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadCodec;

impl PayloadCodec {
    /// Create a new codec
    pub fn new() -> Self {
        Self
    }

    /// Serialize a value into a store payload
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let bytes =
            bincode::serialize(value).codec_context("Failed to serialize value for cache")?;
        Ok(STANDARD.encode(bytes))
    }

    /// Deserialize a store payload back into a value
    pub fn decode<T: DeserializeOwned>(&self, payload: &str) -> Result<T> {
        let bytes = STANDARD.decode(payload)?;
        bincode::deserialize(&bytes).codec_context("Failed to deserialize cached value")
    }
}
