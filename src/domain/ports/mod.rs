//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer: every remote
//! collaborator of the upload stage sits behind one of them.
//! Infrastructure and callers provide concrete implementations.

pub mod functions_api;
pub mod notification;
pub mod permission_checker;
pub mod remote;
pub mod source_uploader;

pub use functions_api::{Gen1FunctionsApi, Gen2FunctionsApi, Gen2UploadTarget};
pub use notification::{NoopNotifier, NotificationSink};
pub use permission_checker::{AllowAllChecker, PermissionChecker};
pub use remote::{RemoteError, RemoteResult};
pub use source_uploader::{
    gen1_upload_headers, SourceUploader, UploadHeaders, CONTENT_LENGTH_RANGE_HEADER,
    MAX_GEN1_SOURCE_BYTES,
};
