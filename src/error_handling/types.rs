//! Error type definitions.
//!
//! This module defines every error the client can return.

use std::sync::Arc;

use log::SetLoggerError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::response::GeoRecord;
use crate::transport::TransportError;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// An error reported by the ipstack API itself.
///
/// Only produced when a request reached the API and the response body was a
/// failure envelope: `{"success": false, "error": {"code", "type", "info"}}`.
///
/// - `code` is the fastest way to tell one failure from another
///   (e.g. 101 for an invalid access key, 104 for an exhausted quota).
/// - `type` is a short label (`invalid_access_key`).
/// - `info` is a human-readable explanation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[error("[{code}]: {error_type} ({info})")]
pub struct ApiError {
    #[serde(default)]
    code: i64,
    #[serde(rename = "type", default)]
    error_type: String,
    #[serde(default)]
    info: String,
}

impl ApiError {
    /// Creates an API error from its parts.
    pub fn new(code: i64, error_type: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            code,
            error_type: error_type.into(),
            info: info.into(),
        }
    }

    /// Numeric error code.
    pub fn code(&self) -> i64 {
        self.code
    }

    /// Short error label.
    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    /// Long error description.
    pub fn info(&self) -> &str {
        &self.info
    }
}

/// Coarse classification of a [`LookupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Absent or invalid client or request state.
    Configuration,
    /// Malformed or empty IP input.
    Validation,
    /// Network, connection or body-read failure.
    Transport,
    /// Malformed JSON.
    Decode,
    /// Failure reported by the API.
    Remote,
}

/// Error returned by every lookup operation.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The client or request is missing required configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The process-wide default client has not been initialized.
    #[error("Default client isn't initialized")]
    NotInitialized,

    /// The input addresses were rejected before any request was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request could not be performed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body was not valid JSON of the expected shape.
    #[error("Decode JSON error ({0})")]
    Decode(#[from] serde_json::Error),

    /// The API answered with a failure envelope.
    #[error("API error {0}")]
    Remote(#[from] ApiError),
}

impl LookupError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::Configuration(_) | LookupError::NotInitialized => {
                ErrorKind::Configuration
            }
            LookupError::Validation(_) => ErrorKind::Validation,
            LookupError::Transport(_) => ErrorKind::Transport,
            LookupError::Decode(_) => ErrorKind::Decode,
            LookupError::Remote(_) => ErrorKind::Remote,
        }
    }

    /// Returns the API error if this is a remote failure.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            LookupError::Remote(e) => Some(e),
            _ => None,
        }
    }
}

/// Failure of a self lookup through `Client::me`.
///
/// Carries the record cached before the failed refresh, if any, so callers
/// can fall back to it.
#[derive(Error, Debug)]
#[error("Self lookup failed: {error}")]
pub struct SelfLookupError {
    #[source]
    error: LookupError,
    stale: Option<Arc<GeoRecord>>,
}

impl SelfLookupError {
    pub(crate) fn new(error: LookupError, stale: Option<Arc<GeoRecord>>) -> Self {
        Self { error, stale }
    }

    /// The error of the failed refresh.
    pub fn error(&self) -> &LookupError {
        &self.error
    }

    /// The previously cached record, if there was one.
    pub fn stale(&self) -> Option<&Arc<GeoRecord>> {
        self.stale.as_ref()
    }

    /// Splits into the error and the stale record.
    pub fn into_parts(self) -> (LookupError, Option<Arc<GeoRecord>>) {
        (self.error, self.stale)
    }
}

impl From<SelfLookupError> for LookupError {
    fn from(err: SelfLookupError) -> Self {
        err.error
    }
}

/// Extracts an [`ApiError`] from any error value.
///
/// Works on a bare `ApiError`, on a [`LookupError::Remote`], and on errors
/// whose source chain contains either. Returns `None` otherwise.
pub fn api_error<'a>(err: &'a (dyn std::error::Error + 'static)) -> Option<&'a ApiError> {
    let mut current: Option<&'a (dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = current {
        if let Some(api) = e.downcast_ref::<ApiError>() {
            return Some(api);
        }
        if let Some(api) = e.downcast_ref::<LookupError>().and_then(LookupError::api_error) {
            return Some(api);
        }
        current = e.source();
    }
    None
}
