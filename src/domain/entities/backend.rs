//! Backend entity - the fully resolved desired deployment state
//!
//! Endpoints are indexed `region -> id -> Endpoint` in sorted maps, so every
//! enumeration (all endpoints, regional endpoints) is deterministic:
//! ordered by region name, then endpoint id.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Endpoint;
use crate::domain::value_objects::Platform;

/// Desired set of endpoints for a project, plus its environment
///
/// Deserialization rejects an index whose region or id key disagrees with
/// the endpoint stored under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "IndexedBackend")]
pub struct Backend {
    /// region -> endpoint id -> endpoint
    #[serde(default)]
    pub endpoints: BTreeMap<String, BTreeMap<String, Endpoint>>,
    /// Environment variables, in declaration order
    #[serde(default)]
    pub environment_variables: IndexMap<String, String>,
}

/// Serialized form of [`Backend`], checked before it becomes one
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IndexedBackend {
    #[serde(default)]
    endpoints: BTreeMap<String, BTreeMap<String, Endpoint>>,
    #[serde(default)]
    environment_variables: IndexMap<String, String>,
}

impl TryFrom<IndexedBackend> for Backend {
    type Error = String;

    fn try_from(indexed: IndexedBackend) -> Result<Self, Self::Error> {
        for (region, endpoints) in &indexed.endpoints {
            for (id, endpoint) in endpoints {
                if endpoint.region != *region || endpoint.id != *id {
                    return Err(format!(
                        "endpoint {} is indexed under {region}/{id}",
                        endpoint.label()
                    ));
                }
            }
        }
        Ok(Self {
            endpoints: indexed.endpoints,
            environment_variables: indexed.environment_variables,
        })
    }
}

impl Backend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a backend from a list of endpoints
    pub fn of(endpoints: impl IntoIterator<Item = Endpoint>) -> Self {
        let mut backend = Self::new();
        for endpoint in endpoints {
            backend.insert(endpoint);
        }
        backend
    }

    pub fn with_environment_variable(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.environment_variables.insert(key.into(), value.into());
        self
    }

    /// Insert an endpoint under its own region, replacing any endpoint with
    /// the same id there
    pub fn insert(&mut self, endpoint: Endpoint) {
        self.endpoints
            .entry(endpoint.region.clone())
            .or_default()
            .insert(endpoint.id.clone(), endpoint);
    }

    /// Regions that host at least one endpoint, sorted
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.endpoints
            .iter()
            .filter(|(_, endpoints)| !endpoints.is_empty())
            .map(|(region, _)| region.as_str())
    }

    /// Every endpoint, ordered by region then id
    pub fn all_endpoints(&self) -> impl Iterator<Item = &Endpoint> {
        self.endpoints.values().flat_map(|endpoints| endpoints.values())
    }

    /// Mutable access to every endpoint, ordered by region then id
    pub fn all_endpoints_mut(&mut self) -> impl Iterator<Item = &mut Endpoint> {
        self.endpoints
            .values_mut()
            .flat_map(|endpoints| endpoints.values_mut())
    }

    /// Endpoints in one region, ordered by id
    pub fn regional_endpoints<'a>(&'a self, region: &str) -> impl Iterator<Item = &'a Endpoint> {
        self.endpoints
            .get(region)
            .into_iter()
            .flat_map(|endpoints| endpoints.values())
    }

    /// Whether any endpoint runs on the given platform generation
    pub fn has_platform(&self, platform: Platform) -> bool {
        self.all_endpoints().any(|e| e.platform == platform)
    }

    /// Number of endpoints across all regions
    pub fn len(&self) -> usize {
        self.endpoints.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
