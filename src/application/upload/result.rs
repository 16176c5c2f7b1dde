//! Upload Result
//!
//! Result types for the upload stage.

use crate::domain::entities::StorageSource;
use crate::domain::value_objects::Platform;

/// One finished upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedUpload {
    /// Platform generation whose archive was uploaded
    pub platform: Platform,
    /// Region the destination was requested in
    pub region: String,
    /// Signed URL the archive was sent to
    pub destination: String,
    /// Storage location (generation 2 only)
    pub storage: Option<StorageSource>,
}

/// Result of an upload stage run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    uploads: Vec<CompletedUpload>,
}

impl UploadReport {
    /// Build a report; uploads are ordered generation 1 first, then by region
    pub fn new(mut uploads: Vec<CompletedUpload>) -> Self {
        uploads.sort_by(|a, b| (a.platform, &a.region).cmp(&(b.platform, &b.region)));
        Self { uploads }
    }

    pub fn uploads(&self) -> &[CompletedUpload] {
        &self.uploads
    }

    /// Uploads of one platform generation
    pub fn for_platform(&self, platform: Platform) -> impl Iterator<Item = &CompletedUpload> {
        self.uploads.iter().filter(move |u| u.platform == platform)
    }

    pub fn len(&self) -> usize {
        self.uploads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uploads.is_empty()
    }
}
