//! Upload planning service
//!
//! Decides which source uploads a desired backend needs, without doing
//! any I/O:
//! - generation 1 needs one upload, whatever regions its endpoints span;
//!   the URL is requested in the first region (sorted) hosting one.
//! - generation 2 needs one upload per region hosting at least one
//!   generation-2 endpoint, never shared across regions.

use crate::domain::entities::Backend;
use crate::domain::value_objects::Platform;

/// One upload to perform
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UploadTarget {
    /// Platform generation whose archive is uploaded
    pub platform: Platform,
    /// Region the upload destination is requested in
    pub region: String,
}

impl UploadTarget {
    pub fn new(platform: Platform, region: impl Into<String>) -> Self {
        Self {
            platform,
            region: region.into(),
        }
    }
}

impl std::fmt::Display for UploadTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.platform, self.region)
    }
}

/// The set of uploads a backend requires
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadPlan {
    /// Region used to request the single generation-1 upload URL
    pub gen1_region: Option<String>,
    /// Regions that each need their own generation-2 upload, sorted
    pub gen2_regions: Vec<String>,
}

impl UploadPlan {
    /// Every upload, generation 1 first, then generation 2 by region
    pub fn targets(&self) -> Vec<UploadTarget> {
        let gen1 = self
            .gen1_region
            .iter()
            .map(|region| UploadTarget::new(Platform::Gcfv1, region.clone()));
        let gen2 = self
            .gen2_regions
            .iter()
            .map(|region| UploadTarget::new(Platform::Gcfv2, region.clone()));
        gen1.chain(gen2).collect()
    }

    /// Whether any upload for the platform generation is planned
    pub fn requires(&self, platform: Platform) -> bool {
        match platform {
            Platform::Gcfv1 => self.gen1_region.is_some(),
            Platform::Gcfv2 => !self.gen2_regions.is_empty(),
        }
    }

    /// Number of uploads
    pub fn len(&self) -> usize {
        usize::from(self.gen1_region.is_some()) + self.gen2_regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Plan the uploads the desired backend needs
pub fn plan_uploads(want: &Backend) -> UploadPlan {
    let gen1_region = want
        .all_endpoints()
        .find(|e| e.platform == Platform::Gcfv1)
        .map(|e| e.region.clone());

    let gen2_regions = want
        .regions()
        .filter(|region| {
            want.regional_endpoints(region)
                .any(|e| e.platform.requires_regional_source())
        })
        .map(str::to_string)
        .collect();

    UploadPlan {
        gen1_region,
        gen2_regions,
    }
}
