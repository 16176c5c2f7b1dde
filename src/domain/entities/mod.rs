//! Domain Entities
//!
//! - `Endpoint` - One deployed function
//! - `Backend` - Desired endpoints across regions, plus environment
//! - `CodebaseSource` / `StorageSource` - Packaged and uploaded archives
//! - `DeployContext` - Per-invocation state shared between stages

mod backend;
mod context;
mod endpoint;
mod source;

pub use backend::Backend;
pub use context::{CodebaseConfig, DeployContext, DeployPayload, RegionStorage, SourceStorage};
pub use endpoint::{Endpoint, SecretEnvVar};
pub use source::{CodebaseSource, StorageSource};
