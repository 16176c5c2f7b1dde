//! Packaged source entities
//!
//! `CodebaseSource` is produced by the packaging stage and never changes
//! afterwards. `StorageSource` is what the generation-2 upload API hands
//! back for a region; downstream stages pass it to the function create call.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Platform;

/// Packaged archives for one codebase, at most one per platform generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodebaseSource {
    /// Archive for generation-1 endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions_source_v1: Option<PathBuf>,
    /// Archive for generation-2 endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions_source_v2: Option<PathBuf>,
}

impl CodebaseSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_v1(mut self, path: impl Into<PathBuf>) -> Self {
        self.functions_source_v1 = Some(path.into());
        self
    }

    pub fn with_v2(mut self, path: impl Into<PathBuf>) -> Self {
        self.functions_source_v2 = Some(path.into());
        self
    }

    /// Archive packaged for a platform generation, if any
    pub fn archive_for(&self, platform: Platform) -> Option<&Path> {
        match platform {
            Platform::Gcfv1 => self.functions_source_v1.as_deref(),
            Platform::Gcfv2 => self.functions_source_v2.as_deref(),
        }
    }

    /// Whether neither generation has an archive (nothing to deploy)
    pub fn is_empty(&self) -> bool {
        self.functions_source_v1.is_none() && self.functions_source_v2.is_none()
    }
}

/// Storage location of an uploaded generation-2 archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSource {
    pub bucket: String,
    pub object: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<i64>,
}

impl StorageSource {
    pub fn new(bucket: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            object: object.into(),
            generation: None,
        }
    }
}

impl std::fmt::Display for StorageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gs://{}/{}", self.bucket, self.object)
    }
}
