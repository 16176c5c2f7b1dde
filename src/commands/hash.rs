//! Hash command handler

use std::path::{Path, PathBuf};

use anyhow::Result;

use fnstage::application::EndpointFingerprinter;
use fnstage::domain::entities::CodebaseSource;
use fnstage::domain::services::environment_variables_hash;
use fnstage::infrastructure::JsonBackendRepository;

pub async fn cmd_hash(
    backend_path: &Path,
    source_v1: Option<PathBuf>,
    source_v2: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let backend = JsonBackendRepository::new().load(backend_path)?;
    let source = CodebaseSource {
        functions_source_v1: source_v1,
        functions_source_v2: source_v2,
    };

    let mut fingerprinter = EndpointFingerprinter::new();
    let fingerprints = fingerprinter.fingerprint_backend(&backend, &source).await?;
    let environment = environment_variables_hash(&backend);

    if json {
        let endpoints: Vec<serde_json::Value> = fingerprints
            .iter()
            .map(|fp| {
                serde_json::json!({
                    "region": fp.region,
                    "id": fp.id,
                    "platform": fp.platform,
                    "source": fp.source.as_str(),
                    "secrets": fp.secrets.as_str(),
                    "hash": fp.endpoint.as_str(),
                })
            })
            .collect();
        let out = serde_json::json!({
            "environment": environment.as_str(),
            "endpoints": endpoints,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("environment {}", environment);
    for fp in &fingerprints {
        println!("{}/{} ({})", fp.region, fp.id, fp.platform);
        println!("  source  {}", fp.source);
        println!("  secrets {}", fp.secrets);
        println!("  hash    {}", fp.endpoint);
    }
    Ok(())
}
