//! Deployment context - transient state shared across deploy stages
//!
//! Lives for one deployment invocation. The only part the upload stage
//! mutates is the generation-2 storage map, which upload tasks write
//! concurrently (one distinct region key per task).

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, PoisonError};

use super::{Backend, CodebaseSource, StorageSource};

/// region -> storage location of the uploaded archive
pub type RegionStorage = BTreeMap<String, StorageSource>;

/// Codebase being deployed in this invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodebaseConfig {
    /// Codebase name (key into the source map)
    pub codebase: String,
    /// Source folder, as named in user-facing messages
    pub source: String,
}

impl CodebaseConfig {
    pub fn new(codebase: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            codebase: codebase.into(),
            source: source.into(),
        }
    }
}

/// Shared, lock-protected `codebase -> region -> StorageSource` map
///
/// Cloning yields another handle to the same map.
#[derive(Debug, Clone, Default)]
pub struct SourceStorage {
    inner: Arc<Mutex<HashMap<String, RegionStorage>>>,
}

impl SourceStorage {
    /// Record where a codebase's archive was stored for a region
    pub fn record(&self, codebase: &str, region: &str, storage: StorageSource) {
        let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        map.entry(codebase.to_string())
            .or_default()
            .insert(region.to_string(), storage);
    }

    /// Snapshot of the recorded regions for a codebase
    pub fn for_codebase(&self, codebase: &str) -> RegionStorage {
        let map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        map.get(codebase).cloned().unwrap_or_default()
    }
}

/// Per-invocation deploy state
#[derive(Debug, Clone, Default)]
pub struct DeployContext {
    /// Project the functions deploy into
    pub project_id: String,
    /// Codebase handled by this invocation; `None` means nothing to do
    pub config: Option<CodebaseConfig>,
    /// Packaged archives per codebase
    pub sources: HashMap<String, CodebaseSource>,
    storage: SourceStorage,
}

impl DeployContext {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Self::default()
        }
    }

    pub fn with_config(mut self, config: CodebaseConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_source(mut self, codebase: impl Into<String>, source: CodebaseSource) -> Self {
        self.sources.insert(codebase.into(), source);
        self
    }

    /// Packaged archives for a codebase
    pub fn source_for(&self, codebase: &str) -> Option<&CodebaseSource> {
        self.sources.get(codebase)
    }

    /// Handle to the shared generation-2 storage map
    pub fn storage(&self) -> &SourceStorage {
        &self.storage
    }

    /// Recorded generation-2 storage locations for a codebase
    pub fn storage_for(&self, codebase: &str) -> RegionStorage {
        self.storage.for_codebase(codebase)
    }
}

/// What the planning stage hands to the deploy stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployPayload {
    /// Desired backend across all regions and platforms
    pub want_backend: Backend,
}

impl DeployPayload {
    pub fn new(want_backend: Backend) -> Self {
        Self { want_backend }
    }
}
