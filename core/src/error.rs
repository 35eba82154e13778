//! Error types for the Tone Analyzer client.
//!
//! # Design
//! Errors fall into three groups. `InvalidArgument` and `InvalidUrl` are
//! detected locally before any request leaves the process. `HttpError` and
//! `Transport` come from the HTTP exchange and carry the server's status and
//! body, or the transport's own error, untouched. `Deserialization` means the
//! server answered 2xx with a body that does not match the result schema.

use thiserror::Error;

use crate::http::TransportError;

/// Errors returned by `ToneAnalyzer` build, parse and call methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller-supplied options are missing or incomplete. No request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The configured service endpoint is not a valid absolute URL.
    #[error("invalid service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request payload could not be serialized to JSON.
    #[error("{operation}: request serialization failed: {source}")]
    Serialization {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The transport failed before a response was received.
    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    /// The response body could not be deserialized into the expected type.
    #[error("{operation}: response deserialization failed: {source}")]
    Deserialization {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status code for `HttpError`, `None` for every other variant.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
