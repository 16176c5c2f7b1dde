//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod fingerprint;
mod upload_planner;

pub use fingerprint::{
    endpoint_hash, environment_variables_hash, secrets_hash, source_hash_of_bytes,
};
pub use upload_planner::{plan_uploads, UploadPlan, UploadTarget};
