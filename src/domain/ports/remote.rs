//! Remote call errors
//!
//! Every collaborator behind a port (permission checks, upload URL
//! generation, byte transfer) reports failures with this type. Transport
//! details such as retries and timeouts stay inside the implementations.

use thiserror::Error;

/// Result type for remote collaborator calls
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Failure reported by a remote collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Caller lacks a required permission
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Service answered with an error status
    #[error("rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Request never got an answer
    #[error("transport error: {0}")]
    Transport(String),

    /// Anything else
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for RemoteError {
    fn from(err: std::io::Error) -> Self {
        RemoteError::Transport(err.to_string())
    }
}
