//! Error types for fnstage
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::RemoteError;
use crate::domain::value_objects::Platform;

/// Result type alias for stage operations
pub type StageResult<T> = Result<T, StageError>;

/// Main error type for the fingerprint and upload stage
#[derive(Error, Debug)]
pub enum StageError {
    /// Endpoints of a platform generation were scheduled but the packaging
    /// stage produced no archive for it.
    #[error(
        "source for codebase {codebase} unexpectedly empty ({platform} archive missing); \
         the packaging and planning stages disagree about what needed building"
    )]
    MissingSource { codebase: String, platform: Platform },

    /// Permission pre-check failed
    #[error(transparent)]
    Permission(RemoteError),

    /// Requesting an upload destination or transferring bytes failed
    #[error("{platform} source upload for region {region} failed: {source}")]
    Upload {
        platform: Platform,
        region: String,
        #[source]
        source: RemoteError,
    },

    /// An upload task panicked or was cancelled by the runtime
    #[error("upload task did not complete: {0}")]
    TaskFailed(String),

    /// Reading a packaged archive failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or parsing a backend manifest failed
    #[error("invalid backend manifest {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    /// Reading or parsing a configuration file failed
    #[error("invalid config {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },
}
