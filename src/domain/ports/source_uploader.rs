//! Source uploader port - streams a packaged archive to a signed URL

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;

use super::RemoteResult;

/// Header bounding the accepted payload size on generation-1 uploads
pub const CONTENT_LENGTH_RANGE_HEADER: &str = "x-goog-content-length-range";

/// Largest archive generation 1 accepts (100 MiB)
pub const MAX_GEN1_SOURCE_BYTES: u64 = 100 * 1024 * 1024;

/// Extra request headers for a transfer, sorted by name
pub type UploadHeaders = BTreeMap<String, String>;

/// Headers for a generation-1 transfer: `0,104857600` byte range
pub fn gen1_upload_headers() -> UploadHeaders {
    let mut headers = UploadHeaders::new();
    headers.insert(
        CONTENT_LENGTH_RANGE_HEADER.to_string(),
        format!("0,{}", MAX_GEN1_SOURCE_BYTES),
    );
    headers
}

/// Byte transfer to an upload destination
///
/// Implementations stream the file; size limits are enforced by the
/// receiving side through the headers, not checked locally.
#[async_trait]
pub trait SourceUploader: Send + Sync {
    /// Upload `file` to `url`, sending `headers` with the request
    async fn upload(&self, file: &Path, url: &str, headers: &UploadHeaders) -> RemoteResult<()>;
}
