//! Upload Sources Use Case
//!
//! Orchestrates the source upload stage of a deploy:
//! 1. Skip when there is no codebase or nothing was packaged
//! 2. Run the permission pre-check
//! 3. Plan one generation-1 upload and one generation-2 upload per region
//! 4. Run every upload concurrently; the first failure aborts the stage
//! 5. Record generation-2 storage locations in the deploy context
//!
//! Upload tasks are spawned on the ambient tokio runtime and share the
//! context's storage map, which is lock-protected and written once per
//! region.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::debug;

use crate::config::Config;
use crate::domain::entities::{CodebaseSource, DeployContext, DeployPayload, SourceStorage};
use crate::domain::ports::{
    gen1_upload_headers, Gen1FunctionsApi, Gen2FunctionsApi, NoopNotifier, NotificationSink,
    PermissionChecker, RemoteError, SourceUploader, UploadHeaders,
};
use crate::domain::services::{plan_uploads, UploadPlan};
use crate::domain::value_objects::Platform;
use crate::error::{StageError, StageResult};

use super::result::{CompletedUpload, UploadReport};

/// Upload use case - gets packaged source to every destination it needs
///
/// Every remote collaborator is a port, so tests and dry runs can swap
/// in their own implementations.
pub struct UploadSourcesUseCase {
    permissions: Arc<dyn PermissionChecker>,
    gen1_api: Arc<dyn Gen1FunctionsApi>,
    gen2_api: Arc<dyn Gen2FunctionsApi>,
    uploader: Arc<dyn SourceUploader>,
    notifier: Arc<dyn NotificationSink>,
}

impl UploadSourcesUseCase {
    pub fn new(
        permissions: Arc<dyn PermissionChecker>,
        gen1_api: Arc<dyn Gen1FunctionsApi>,
        gen2_api: Arc<dyn Gen2FunctionsApi>,
        uploader: Arc<dyn SourceUploader>,
    ) -> Self {
        Self {
            permissions,
            gen1_api,
            gen2_api,
            uploader,
            notifier: Arc::new(NoopNotifier),
        }
    }

    /// Set the sink for user-facing success and warning lines
    pub fn with_notifier(mut self, notifier: Arc<dyn NotificationSink>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Execute the upload stage
    ///
    /// Returns an empty report without contacting anything when the
    /// context has no codebase or the codebase has no packaged archive.
    /// Permission failures are returned as-is. Any other failure emits one
    /// `functions: Upload Error: ...` warning before it is returned.
    pub async fn execute(
        &self,
        context: &DeployContext,
        config: &Config,
        payload: &DeployPayload,
    ) -> StageResult<UploadReport> {
        let Some(codebase_config) = context.config.as_ref() else {
            debug!("no codebase configured, skipping source upload");
            return Ok(UploadReport::default());
        };
        let codebase = codebase_config.codebase.as_str();
        let Some(source) = context.source_for(codebase).filter(|s| !s.is_empty()) else {
            debug!(codebase, "no packaged source, skipping source upload");
            return Ok(UploadReport::default());
        };

        self.permissions
            .check_access(context, config, payload)
            .await
            .map_err(StageError::Permission)?;

        let plan = plan_uploads(&payload.want_backend);
        match self.upload_all(context, codebase, source, &plan).await {
            Ok(report) => {
                if !report.is_empty() {
                    self.notifier.log_success(&format!(
                        "functions: {} folder uploaded successfully",
                        codebase_config.source
                    ));
                }
                Ok(report)
            }
            Err(err) => {
                self.notifier
                    .log_warning(&format!("functions: Upload Error: {err}"));
                Err(err)
            }
        }
    }

    async fn upload_all(
        &self,
        context: &DeployContext,
        codebase: &str,
        source: &CodebaseSource,
        plan: &UploadPlan,
    ) -> StageResult<UploadReport> {
        // Resolve every archive before anything is spawned.
        let gen1 = match &plan.gen1_region {
            Some(region) => Some((region.clone(), archive(source, codebase, Platform::Gcfv1)?)),
            None => None,
        };
        let gen2_archive = if plan.requires(Platform::Gcfv2) {
            Some(archive(source, codebase, Platform::Gcfv2)?)
        } else {
            None
        };

        let mut tasks = JoinSet::new();
        if let Some((region, archive)) = gen1 {
            debug!(%region, archive = %archive.display(), "scheduling gcfv1 upload");
            tasks.spawn(upload_gen1(
                Arc::clone(&self.gen1_api),
                Arc::clone(&self.uploader),
                context.project_id.clone(),
                region,
                archive,
            ));
        }
        if let Some(archive) = gen2_archive {
            for region in &plan.gen2_regions {
                debug!(%region, archive = %archive.display(), "scheduling gcfv2 upload");
                tasks.spawn(upload_gen2(
                    Arc::clone(&self.gen2_api),
                    Arc::clone(&self.uploader),
                    context.storage().clone(),
                    Gen2Job {
                        project_id: context.project_id.clone(),
                        codebase: codebase.to_string(),
                        region: region.clone(),
                        archive: archive.clone(),
                    },
                ));
            }
        }

        let mut uploads = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            let outcome = joined
                .map_err(|err| StageError::TaskFailed(err.to_string()))
                .and_then(|result| result);
            match outcome {
                Ok(upload) => {
                    debug!(platform = %upload.platform, region = %upload.region, "upload complete");
                    uploads.push(upload);
                }
                Err(err) => {
                    // Siblings keep running; their results are dropped.
                    tasks.detach_all();
                    return Err(err);
                }
            }
        }
        Ok(UploadReport::new(uploads))
    }
}

/// Inputs of one generation-2 upload task
struct Gen2Job {
    project_id: String,
    codebase: String,
    region: String,
    archive: PathBuf,
}

fn archive(source: &CodebaseSource, codebase: &str, platform: Platform) -> StageResult<PathBuf> {
    source
        .archive_for(platform)
        .map(Path::to_path_buf)
        .ok_or_else(|| StageError::MissingSource {
            codebase: codebase.to_string(),
            platform,
        })
}

fn upload_failed(platform: Platform, region: &str) -> impl FnOnce(RemoteError) -> StageError + '_ {
    move |source| StageError::Upload {
        platform,
        region: region.to_string(),
        source,
    }
}

async fn upload_gen1(
    api: Arc<dyn Gen1FunctionsApi>,
    uploader: Arc<dyn SourceUploader>,
    project_id: String,
    region: String,
    archive: PathBuf,
) -> StageResult<CompletedUpload> {
    let url = api
        .generate_upload_url(&project_id, &region)
        .await
        .map_err(upload_failed(Platform::Gcfv1, &region))?;
    uploader
        .upload(&archive, &url, &gen1_upload_headers())
        .await
        .map_err(upload_failed(Platform::Gcfv1, &region))?;
    Ok(CompletedUpload {
        platform: Platform::Gcfv1,
        region,
        destination: url,
        storage: None,
    })
}

async fn upload_gen2(
    api: Arc<dyn Gen2FunctionsApi>,
    uploader: Arc<dyn SourceUploader>,
    storage: SourceStorage,
    job: Gen2Job,
) -> StageResult<CompletedUpload> {
    let target = api
        .generate_upload_url(&job.project_id, &job.region)
        .await
        .map_err(upload_failed(Platform::Gcfv2, &job.region))?;
    uploader
        .upload(&job.archive, &target.upload_url, &UploadHeaders::new())
        .await
        .map_err(upload_failed(Platform::Gcfv2, &job.region))?;
    storage.record(&job.codebase, &job.region, target.storage_source.clone());
    Ok(CompletedUpload {
        platform: Platform::Gcfv2,
        region: job.region,
        destination: target.upload_url,
        storage: Some(target.storage_source),
    })
}
