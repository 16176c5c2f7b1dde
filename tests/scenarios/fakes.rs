//! In-memory platform fakes shared by scenarios.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use fnstage::domain::entities::StorageSource;
use fnstage::domain::ports::{
    Gen1FunctionsApi, Gen2FunctionsApi, Gen2UploadTarget, NotificationSink, RemoteError,
    RemoteResult, SourceUploader, UploadHeaders,
};

/// Fake object store: URL -> uploaded bytes
#[derive(Default)]
pub struct FakePlatform {
    pub objects: Mutex<BTreeMap<String, Vec<u8>>>,
    pub rejected_regions: HashSet<String>,
}

impl FakePlatform {
    pub fn rejecting(region: &str) -> Arc<Self> {
        Arc::new(Self {
            rejected_regions: HashSet::from([region.to_string()]),
            ..Self::default()
        })
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl Gen1FunctionsApi for FakePlatform {
    async fn generate_upload_url(&self, project_id: &str, region: &str) -> RemoteResult<String> {
        Ok(format!("https://storage.test/gcf-v1/{project_id}/{region}/source.zip"))
    }
}

#[async_trait]
impl Gen2FunctionsApi for FakePlatform {
    async fn generate_upload_url(
        &self,
        project_id: &str,
        region: &str,
    ) -> RemoteResult<Gen2UploadTarget> {
        let bucket = format!("gcf-v2-uploads-{project_id}-{region}");
        Ok(Gen2UploadTarget {
            upload_url: format!("https://storage.test/{bucket}/source.zip"),
            storage_source: StorageSource::new(bucket, "source.zip"),
        })
    }
}

#[async_trait]
impl SourceUploader for FakePlatform {
    async fn upload(&self, file: &Path, url: &str, _headers: &UploadHeaders) -> RemoteResult<()> {
        if self.rejected_regions.iter().any(|region| url.contains(region.as_str())) {
            return Err(RemoteError::Rejected {
                status: 403,
                message: "bucket not writable".to_string(),
            });
        }
        let bytes = tokio::fs::read(file).await?;
        self.objects.lock().unwrap().insert(url.to_string(), bytes);
        Ok(())
    }
}

/// Notification sink that keeps every line
#[derive(Default)]
pub struct Transcript {
    pub lines: Mutex<Vec<String>>,
}

impl NotificationSink for Transcript {
    fn log_success(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }

    fn log_warning(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}
