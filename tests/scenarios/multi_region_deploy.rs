//! Scenario: fingerprint a two-generation backend, then upload its source.

use std::fs;
use std::sync::Arc;

use tempfile::tempdir;

use fnstage::domain::entities::{CodebaseConfig, SecretEnvVar};
use fnstage::domain::ports::AllowAllChecker;
use fnstage::{
    Backend, CodebaseSource, Config, DeployContext, DeployPayload, Endpoint,
    EndpointFingerprinter, Platform, StageError, UploadSourcesUseCase,
};

use super::fakes::{FakePlatform, Transcript};

fn backend() -> Backend {
    Backend::of([
        Endpoint::new("legacy", "us-east1", Platform::Gcfv1),
        Endpoint::new("webhook", "europe-west1", Platform::Gcfv1),
        Endpoint::new("api", "us-central1", Platform::Gcfv2)
            .with_secrets(vec![SecretEnvVar::pinned("STRIPE", "stripe", "3")]),
        Endpoint::new("eu-api", "europe-west1", Platform::Gcfv2),
    ])
    .with_environment_variable("MODE", "prod")
}

fn use_case(platform: Arc<FakePlatform>, transcript: Arc<Transcript>) -> UploadSourcesUseCase {
    UploadSourcesUseCase::new(
        Arc::new(AllowAllChecker),
        platform.clone(),
        platform.clone(),
        platform,
    )
    .with_notifier(transcript)
}

#[tokio::test]
async fn fingerprints_then_uploads_every_target() {
    let dir = tempdir().unwrap();
    let v1 = dir.path().join("v1.zip");
    let v2 = dir.path().join("v2.zip");
    fs::write(&v1, b"gen1 archive").unwrap();
    fs::write(&v2, b"gen2 archive").unwrap();
    let source = CodebaseSource::new().with_v1(&v1).with_v2(&v2);

    let mut want = backend();
    let mut fingerprinter = EndpointFingerprinter::new();
    fingerprinter.apply(&mut want, &source).await.unwrap();
    assert!(want.all_endpoints().all(|e| e.hash.is_some()));

    let context = DeployContext::new("demo-project")
        .with_config(CodebaseConfig::new("default", "functions"))
        .with_source("default", source);
    let platform = Arc::new(FakePlatform::default());
    let transcript = Arc::new(Transcript::default());

    let report = use_case(platform.clone(), transcript.clone())
        .execute(&context, &Config::default(), &DeployPayload::new(want))
        .await
        .unwrap();

    // One gen-1 upload plus one per gen-2 region.
    assert_eq!(report.len(), 3);
    assert_eq!(platform.object_count(), 3);
    let objects = platform.objects.lock().unwrap().clone();
    assert_eq!(
        objects["https://storage.test/gcf-v1/demo-project/europe-west1/source.zip"],
        b"gen1 archive"
    );

    let storage = context.storage_for("default");
    let regions: Vec<&str> = storage.keys().map(String::as_str).collect();
    assert_eq!(regions, vec!["europe-west1", "us-central1"]);
    assert_eq!(
        storage["us-central1"].bucket,
        "gcf-v2-uploads-demo-project-us-central1"
    );

    assert_eq!(
        *transcript.lines.lock().unwrap(),
        vec!["functions: functions folder uploaded successfully"]
    );
}

#[tokio::test]
async fn rejected_region_fails_whole_stage() {
    let dir = tempdir().unwrap();
    let v2 = dir.path().join("v2.zip");
    fs::write(&v2, b"gen2 archive").unwrap();

    let want = Backend::of([
        Endpoint::new("api", "us-central1", Platform::Gcfv2),
        Endpoint::new("eu-api", "europe-west1", Platform::Gcfv2),
    ]);
    let context = DeployContext::new("demo-project")
        .with_config(CodebaseConfig::new("default", "functions"))
        .with_source("default", CodebaseSource::new().with_v2(&v2));
    let platform = FakePlatform::rejecting("europe-west1");
    let transcript = Arc::new(Transcript::default());

    let err = use_case(platform, transcript.clone())
        .execute(&context, &Config::default(), &DeployPayload::new(want))
        .await
        .unwrap_err();

    assert!(matches!(err, StageError::Upload { ref region, .. } if region == "europe-west1"));
    let lines = transcript.lines.lock().unwrap().clone();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("functions: Upload Error: "));
    assert!(lines[0].contains("bucket not writable"));
    // The us-central1 entry may or may not have landed; never europe-west1.
    assert!(!context.storage_for("default").contains_key("europe-west1"));
}
