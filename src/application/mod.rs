//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Performs the I/O the pure domain services leave out
//!
//! ## Use Cases
//!
//! - `UploadSourcesUseCase` - Uploads packaged source for every platform generation and region
//!
//! ## Services
//!
//! - `source_hash` / `EndpointFingerprinter` - Fingerprint endpoints, reading archives once

pub mod fingerprint;
pub mod upload;

pub use fingerprint::{source_hash, EndpointFingerprint, EndpointFingerprinter};
pub use upload::{CompletedUpload, UploadReport, UploadSourcesUseCase};
