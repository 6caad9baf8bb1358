//! Error types for the hero API client.
//!
//! # Design
//! `HeroClient` never surfaces these to its callers — every failure is
//! recorded on the diagnostic sink, logged to the notifier, and replaced by
//! a fallback value. The variants exist so the diagnostic channel can tell
//! a dead socket apart from a 500 or a malformed body; the facade treats
//! them all the same.

use std::fmt;

/// A failed hero API round-trip.
#[derive(Debug)]
pub enum ApiError {
    /// The transport could not complete the request (connection refused,
    /// DNS failure, broken pipe).
    Transport(String),

    /// The server answered with a non-2xx status.
    UnexpectedStatus { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::UnexpectedStatus { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
