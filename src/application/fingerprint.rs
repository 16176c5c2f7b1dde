//! Endpoint fingerprinting
//!
//! Composes the pure hashes of the domain fingerprint engine with the one
//! piece of I/O they need: reading the packaged archive. Source hashes are
//! cached per archive path, so a codebase's archive is read once no matter
//! how many endpoints share it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::{Backend, CodebaseSource};
use crate::domain::services::{
    endpoint_hash, environment_variables_hash, secrets_hash, source_hash_of_bytes,
};
use crate::domain::value_objects::{Fingerprint, Platform};
use crate::error::{StageError, StageResult};

/// Hash of a packaged archive's bytes; `None` hashes nothing
///
/// Read failures are returned, never treated as empty content.
pub async fn source_hash(package: Option<&Path>) -> StageResult<Fingerprint> {
    let Some(path) = package else {
        return Ok(source_hash_of_bytes(None));
    };
    let bytes = tokio::fs::read(path).await.map_err(|source| StageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(source_hash_of_bytes(Some(bytes.as_slice())))
}

/// All fingerprints of one endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointFingerprint {
    pub region: String,
    pub id: String,
    pub platform: Platform,
    pub environment: Fingerprint,
    pub source: Fingerprint,
    pub secrets: Fingerprint,
    pub endpoint: Fingerprint,
}

/// Computes endpoint fingerprints for a backend
#[derive(Debug, Default)]
pub struct EndpointFingerprinter {
    source_cache: HashMap<PathBuf, Fingerprint>,
}

impl EndpointFingerprinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source hash of an archive, read at most once per path
    pub async fn source_hash(&mut self, package: Option<&Path>) -> StageResult<Fingerprint> {
        let Some(path) = package else {
            return source_hash(None).await;
        };
        if let Some(cached) = self.source_cache.get(path) {
            return Ok(cached.clone());
        }
        let fingerprint = source_hash(Some(path)).await?;
        debug!(path = %path.display(), %fingerprint, "hashed packaged source");
        self.source_cache
            .insert(path.to_path_buf(), fingerprint.clone());
        Ok(fingerprint)
    }

    /// Forget a cached source hash (e.g. after the archive was rebuilt)
    pub fn invalidate(&mut self, package: &Path) -> bool {
        self.source_cache.remove(package).is_some()
    }

    /// Fingerprints of every endpoint, ordered by region then id
    ///
    /// Each endpoint's source hash comes from the archive packaged for its
    /// platform generation; a generation without an archive hashes nothing.
    pub async fn fingerprint_backend(
        &mut self,
        backend: &Backend,
        source: &CodebaseSource,
    ) -> StageResult<Vec<EndpointFingerprint>> {
        let environment = environment_variables_hash(backend);
        let mut by_platform: HashMap<Platform, Fingerprint> = HashMap::new();
        for platform in Platform::ALL {
            if backend.has_platform(platform) {
                let hash = self.source_hash(source.archive_for(platform)).await?;
                by_platform.insert(platform, hash);
            }
        }

        let fingerprints = backend
            .all_endpoints()
            .map(|endpoint| {
                let source = by_platform
                    .get(&endpoint.platform)
                    .cloned()
                    .unwrap_or_else(Fingerprint::empty);
                let secrets = secrets_hash(endpoint);
                EndpointFingerprint {
                    region: endpoint.region.clone(),
                    id: endpoint.id.clone(),
                    platform: endpoint.platform,
                    endpoint: endpoint_hash(&source, &environment, &secrets),
                    environment: environment.clone(),
                    source,
                    secrets,
                }
            })
            .collect();
        Ok(fingerprints)
    }

    /// Record each endpoint's fingerprint in its `hash` slot
    pub async fn apply(
        &mut self,
        backend: &mut Backend,
        source: &CodebaseSource,
    ) -> StageResult<()> {
        let fingerprints = self.fingerprint_backend(backend, source).await?;
        // Both sequences walk the same sorted maps, so they line up.
        for (endpoint, fingerprint) in backend.all_endpoints_mut().zip(&fingerprints) {
            endpoint.set_hash(&fingerprint.endpoint);
        }
        Ok(())
    }
}
