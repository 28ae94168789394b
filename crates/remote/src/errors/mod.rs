//! Error types for remote store operations.

use thiserror::Error;

/// Errors that can occur while talking to the remote collection store.
///
/// Every accessor call is a single attempt; recovery (fallback tiers,
/// user-facing messaging) is the caller's responsibility.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The server answered with a non-success status code.
    #[error("Request failed with status {status}: {message}")]
    Status {
        /// HTTP status code returned by the server
        status: u16,
        /// Response body or reason phrase, truncated for logging
        message: String,
    },

    /// The request never produced a response (DNS, connect, timeout, TLS)
    /// or the response body could not be decoded as JSON.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl RemoteError {
    /// HTTP status code carried by this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|code| code.as_u16()),
        }
    }

    /// True when the server answered 404 for the requested resource.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
