//! Platform value object - which function platform generation an endpoint runs on

use serde::{Deserialize, Serialize};

/// Platform generation of a deployed function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Generation 1: region-insensitive source upload
    Gcfv1,
    /// Generation 2: data residency, one upload per region
    Gcfv2,
}

impl Platform {
    /// Both generations, in upload scheduling order
    pub const ALL: [Platform; 2] = [Platform::Gcfv1, Platform::Gcfv2];

    /// Wire name used in manifests
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Gcfv1 => "gcfv1",
            Platform::Gcfv2 => "gcfv2",
        }
    }

    /// Whether uploaded source must live in the region it runs in
    pub fn requires_regional_source(&self) -> bool {
        matches!(self, Platform::Gcfv2)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
