//! Plan command handler

use std::path::Path;

use anyhow::Result;

use fnstage::config::Config;
use fnstage::domain::services::plan_uploads;
use fnstage::infrastructure::JsonBackendRepository;

pub fn cmd_plan(backend_path: &Path, config: &Config, json: bool) -> Result<()> {
    let backend = JsonBackendRepository::new().load(backend_path)?;
    let plan = plan_uploads(&backend);
    let targets = plan.targets();

    if json {
        let uploads: Vec<serde_json::Value> = targets
            .iter()
            .map(|t| serde_json::json!({ "platform": t.platform, "region": t.region }))
            .collect();
        let out = serde_json::json!({
            "project": config.project_id(),
            "codebase": config.functions.codebase,
            "source": config.functions.source,
            "uploads": uploads,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let codebase = &config.functions.codebase;
    if targets.is_empty() {
        println!("No source uploads needed for codebase {codebase}");
        return Ok(());
    }
    println!(
        "{} source upload(s) for codebase {codebase} ({} folder):",
        targets.len(),
        config.functions.source
    );
    for target in &targets {
        println!("  {target}");
    }
    Ok(())
}
