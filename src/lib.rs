//! fnstage - change detection and source upload for function deploys
//!
//! Two pieces of a multi-region functions deploy:
//! - the fingerprint engine, which reduces an endpoint's deploy-relevant
//!   inputs (environment, pinned secrets, packaged source) to SHA-256
//!   fingerprints, so unchanged endpoints can be skipped;
//! - the upload stage, which sends a codebase's packaged source to every
//!   platform generation and region that needs it, concurrently.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    source_hash, EndpointFingerprint, EndpointFingerprinter, UploadReport, UploadSourcesUseCase,
};
pub use config::Config;
pub use domain::entities::{Backend, CodebaseSource, DeployContext, DeployPayload, Endpoint};
pub use domain::value_objects::{Fingerprint, Platform};
pub use error::{StageError, StageResult};
