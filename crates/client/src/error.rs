//! Typed error type for the client crate.

use thiserror::Error;

/// Errors surfaced by a query or health request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS
    /// failure, malformed URL, ...).
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Api { status: u16, body: String },
}
