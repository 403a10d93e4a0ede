//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error produced by a pending computation
pub type LoadError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the loader cache
///
/// None of these errors cross the adapter boundary during normal cache
/// operations: the adapter logs them and degrades to "no cached value".
/// Only construction (configuration, store client creation) returns them.
#[derive(Error, Debug)]
pub enum Error {
    /// Remote store connectivity or command failure
    #[error("Store error: {message}")]
    Store {
        /// Description of the store error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Payload serialization or deserialization failure
    #[error("Codec error: {message}")]
    Codec {
        /// Description of the codec error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Base64 decoding error
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The pending computation itself failed
    #[error("Resolution error: {message}")]
    Resolution {
        /// Description of the resolution failure
        message: String,
        /// Error raised by the computation, if any
        #[source]
        source: Option<LoadError>,
    },

    /// A pending value kept deferring past the allowed chain depth
    #[error("Pending value chain exceeded maximum depth of {max_depth}")]
    ChainTooDeep {
        /// The configured depth limit
        max_depth: usize,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Store error creation methods
impl Error {
    /// Create a store error
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
            source: None,
        }
    }

    /// Create a store error with source
    pub fn store_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Store {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Codec error creation methods
impl Error {
    /// Create a codec error
    pub fn codec<S: Into<String>>(message: S) -> Self {
        Self::Codec {
            message: message.into(),
            source: None,
        }
    }

    /// Create a codec error with source
    pub fn codec_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Codec {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Resolution error creation methods
impl Error {
    /// Create a resolution error
    pub fn resolution<S: Into<String>>(message: S) -> Self {
        Self::Resolution {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap the error raised by a pending computation
    pub fn resolution_failed(source: LoadError) -> Self {
        Self::Resolution {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Create a chain depth error
    pub fn chain_too_deep(max_depth: usize) -> Self {
        Self::ChainTooDeep { max_depth }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Whether this error came from the remote store
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store { .. })
    }

    /// Whether this error came from encoding or decoding a payload
    pub fn is_codec(&self) -> bool {
        matches!(self, Self::Codec { .. } | Self::Base64(_))
    }

    /// Whether this error came from draining a pending value
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution { .. } | Self::ChainTooDeep { .. })
    }
}
