//! Endpoint entity - one deployed function
//!
//! An endpoint belongs to exactly one region and one platform generation.
//! Only the attributes that matter for fingerprinting and source upload
//! are modelled here; trigger configuration lives with the planner.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Fingerprint, Platform};

/// A secret bound into an endpoint's environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretEnvVar {
    /// Environment variable name the secret is exposed as
    pub key: String,
    /// Secret name
    pub secret: String,
    /// Pinned version; `None` means "latest"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl SecretEnvVar {
    /// A binding pinned to an explicit version
    pub fn pinned(
        key: impl Into<String>,
        secret: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
            version: Some(version.into()),
        }
    }

    /// A binding that follows the latest version
    pub fn latest(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
            version: None,
        }
    }

    /// Explicit version, treating an empty string like no version
    pub fn pinned_version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }
}

/// One deployed function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Function id, unique within a region
    pub id: String,
    /// Region the function runs in
    pub region: String,
    /// Platform generation
    pub platform: Platform,
    /// Codebase the function belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codebase: Option<String>,
    /// Language runtime (e.g. `nodejs20`)
    #[serde(default)]
    pub runtime: String,
    /// Exported entry point
    #[serde(default)]
    pub entry_point: String,
    /// Secret bindings, in declaration order
    #[serde(default)]
    pub secret_environment_variables: Vec<SecretEnvVar>,
    /// Endpoint fingerprint, filled in by the fingerprinter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl Endpoint {
    /// Create an endpoint with no secrets and an empty runtime
    pub fn new(id: impl Into<String>, region: impl Into<String>, platform: Platform) -> Self {
        let id = id.into();
        Self {
            entry_point: id.clone(),
            id,
            region: region.into(),
            platform,
            codebase: None,
            runtime: String::new(),
            secret_environment_variables: Vec::new(),
            hash: None,
        }
    }

    pub fn with_codebase(mut self, codebase: impl Into<String>) -> Self {
        self.codebase = Some(codebase.into());
        self
    }

    pub fn with_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = runtime.into();
        self
    }

    pub fn with_secrets(mut self, secrets: Vec<SecretEnvVar>) -> Self {
        self.secret_environment_variables = secrets;
        self
    }

    /// Record a computed fingerprint on the endpoint
    pub fn set_hash(&mut self, fingerprint: &Fingerprint) {
        self.hash = Some(fingerprint.as_str().to_string());
    }

    /// `region/id`, used in log output
    pub fn label(&self) -> String {
        format!("{}/{}", self.region, self.id)
    }
}
