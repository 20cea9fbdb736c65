//! Error types for TON API client operations.
//!
//! This module defines the [`ClientError`] enum which covers every failure
//! mode of the client: invalid configuration, request encoding, network
//! transport, API-level rejections, and response decoding.

use thiserror::Error;

/// Errors that can occur when talking to the TON HTTP API.
///
/// The variants keep the failure layers distinct so callers can tell
/// "the server said no" ([`Api`](ClientError::Api)) apart from "the client
/// misunderstood the shape" ([`Decode`](ClientError::Decode)) and from plain
/// connectivity problems ([`Network`](ClientError::Network)).
#[derive(Debug, Error)]
pub enum ClientError {
    /// Invalid client configuration (missing or too-short API key).
    ///
    /// Raised at construction time only, never during a call.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The request body could not be serialized to JSON.
    ///
    /// Fails before any network I/O is performed.
    #[error("Failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The HTTP request failed at the network level.
    ///
    /// Covers DNS resolution failures, refused connections, timeouts and
    /// TLS handshake errors. Never retried internally.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The remote API reported a failure.
    ///
    /// Produced for a non-2xx response, for an HTTP-200 body carrying
    /// `ok: false`, and for a populated JSON-RPC `error` member. Whatever
    /// diagnostics the API provided are carried along.
    #[error("API error: {message}")]
    Api {
        /// Error text from the API, or the raw body when undecodable.
        message: String,
        /// The API's own error code, when it supplied one.
        code: Option<i64>,
        /// The HTTP status, when the failure came from a non-2xx response.
        http_status: Option<u16>,
    },

    /// The response bytes did not match the expected typed shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The base URL and endpoint path did not combine into a valid URL.
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}
