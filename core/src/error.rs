//! Error types for the roster API client.
//!
//! # Design
//! `Network` exists even though the core performs no I/O: the host executor
//! reports transport failures through it, so the synchronizer sees "the
//! request never arrived" and "the response made no sense" through one
//! channel. Non-2xx statuses land in `Http` with the raw status code and
//! body for diagnostics.

use std::fmt;

/// Errors surfaced around the remote collection operations.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be sent or no response was received.
    Network(String),

    /// The server answered with an unexpected status code.
    Http { status: u16, body: String },

    /// The response body could not be decoded into the expected shape.
    Decode(String),

    /// The request payload could not be encoded as JSON.
    Serialize(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Decode(msg) => write!(f, "decoding failed: {msg}"),
            ApiError::Serialize(msg) => write!(f, "serialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
