//! Function platform API ports
//!
//! Each platform generation issues short-lived upload destinations.
//! Generation 1 only hands back a URL; generation 2 also names the storage
//! object the archive will live in, which later stages reference.

use async_trait::async_trait;

use super::RemoteResult;
use crate::domain::entities::StorageSource;

/// Upload destination issued by the generation-2 API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gen2UploadTarget {
    /// Signed URL to PUT the archive to
    pub upload_url: String,
    /// Where the archive ends up once uploaded
    pub storage_source: StorageSource,
}

/// Generation-1 functions API
#[async_trait]
pub trait Gen1FunctionsApi: Send + Sync {
    /// Request a signed upload URL for `project_id` in `region`
    async fn generate_upload_url(&self, project_id: &str, region: &str) -> RemoteResult<String>;
}

/// Generation-2 functions API
#[async_trait]
pub trait Gen2FunctionsApi: Send + Sync {
    /// Request a region-local upload destination for `project_id`
    async fn generate_upload_url(
        &self,
        project_id: &str,
        region: &str,
    ) -> RemoteResult<Gen2UploadTarget>;
}
