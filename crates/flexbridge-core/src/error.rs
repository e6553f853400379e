//! Core error types.

use thiserror::Error;

/// Mapping errors.
///
/// Every variant is fatal: the mapping pass stops at the first error and the
/// application is expected to abort its startup.
#[derive(Debug, Error)]
pub enum Error {
    /// The relationship payload could not be decoded.
    #[error("malformed relationship metadata: {0}")]
    MalformedMetadata(String),

    /// The database engine has no known URL dialect.
    #[error("unknown database engine: {0}")]
    UnknownEngine(String),

    /// The variable name could be confused with a request header.
    #[error("refusing to set ambiguous environment variable {0}")]
    AmbiguousName(String),

    /// The variable could not be written to an environment store.
    #[error("failed to set environment variable {name}: {reason}")]
    Write { name: String, reason: String },
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::MalformedMetadata(format!("base64: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedMetadata(format!("json: {}", err))
    }
}

/// Result alias for mapping operations.
pub type Result<T> = std::result::Result<T, Error>;
