//! Error types for the accounts API client.
//!
//! # Design
//! Only local failures are errors. An HTTP status, whatever its value, is
//! response data and never maps to a variant here. Each failing stage of the
//! pipeline (build, encode, send, read, decode) gets its own variant so
//! callers and tests can tell the cause apart.

use thiserror::Error;

/// Errors returned by `AccountClient` operations and response helpers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be constructed (bad host, URL or method).
    #[error("request build failed: {0}")]
    RequestBuildError(String),

    /// The request payload could not be serialized.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The response body stream could not be read.
    #[error("reading response body failed: {0}")]
    IoError(String),

    /// The request was never answered: connection refused, DNS failure and
    /// the like.
    #[error("transport failed: {0}")]
    TransportError(String),
}

/// Errors raised while loading `ClientConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}
