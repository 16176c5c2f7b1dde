//! JSON Backend Repository
//!
//! Loads a desired backend from a JSON manifest:
//!
//! ```json
//! {
//!   "environmentVariables": { "MODE": "prod" },
//!   "endpoints": [
//!     { "id": "api", "region": "us-central1", "platform": "gcfv2" }
//!   ]
//! }
//! ```
//!
//! Endpoints are listed flat; the repository indexes them by region.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Backend, Endpoint};
use crate::error::{StageError, StageResult};

/// JSON-file backend manifest repository
#[derive(Debug, Default)]
pub struct JsonBackendRepository;

/// On-disk representation of a backend
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct BackendManifest {
    #[serde(default)]
    environment_variables: IndexMap<String, String>,
    #[serde(default)]
    endpoints: Vec<Endpoint>,
}

impl JsonBackendRepository {
    pub fn new() -> Self {
        Self
    }

    /// Load a backend manifest from `path`
    pub fn load(&self, path: &Path) -> StageResult<Backend> {
        let content = std::fs::read_to_string(path).map_err(|source| StageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(&content, path)
    }

    /// Parse manifest text; `path` is only used in error messages
    pub fn parse(&self, content: &str, path: &Path) -> StageResult<Backend> {
        let manifest: BackendManifest =
            serde_json::from_str(content).map_err(|e| StageError::InvalidManifest {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let mut backend = Backend::new();
        for endpoint in manifest.endpoints {
            if endpoint.id.is_empty() || endpoint.region.is_empty() {
                return Err(StageError::InvalidManifest {
                    path: path.to_path_buf(),
                    message: "every endpoint needs a non-empty id and region".to_string(),
                });
            }
            if backend.regional_endpoints(&endpoint.region).any(|e| e.id == endpoint.id) {
                return Err(StageError::InvalidManifest {
                    path: path.to_path_buf(),
                    message: format!("duplicate endpoint {}", endpoint.label()),
                });
            }
            backend.insert(endpoint);
        }
        backend.environment_variables = manifest.environment_variables;
        Ok(backend)
    }
}
