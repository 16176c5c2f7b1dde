//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StageResult;

use super::loader::{self, ConfigWarning};

/// Project configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project the functions deploy into
    #[serde(default)]
    pub id: Option<String>,
}

/// Functions configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionsConfig {
    /// Codebase deployed by this invocation
    #[serde(default = "default_codebase")]
    pub codebase: String,
    /// Source folder of the codebase
    #[serde(default = "default_source")]
    pub source: String,
}

impl Default for FunctionsConfig {
    fn default() -> Self {
        Self {
            codebase: default_codebase(),
            source: default_source(),
        }
    }
}

fn default_codebase() -> String {
    "default".to_string()
}

fn default_source() -> String {
    "functions".to_string()
}

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// `tracing` filter directive for this verbosity
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
            Verbosity::Debug => "trace",
        }
    }

    /// Raise verbosity by `-v` occurrences
    pub fn raised_by(self, count: u8) -> Self {
        let level = match self {
            Verbosity::Quiet => 0u8,
            Verbosity::Normal => 1,
            Verbosity::Verbose => 2,
            Verbosity::Debug => 3,
        };
        match level.saturating_add(count) {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            2 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub functions: FunctionsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StageResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> StageResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply
    /// `FNSTAGE_*` environment overrides
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Project id, or an empty string when unset
    pub fn project_id(&self) -> &str {
        self.project.id.as_deref().unwrap_or_default()
    }

    /// Apply overrides from a variable lookup (`FNSTAGE_*` names)
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(project) = lookup("FNSTAGE_PROJECT").filter(|v| !v.trim().is_empty()) {
            self.project.id = Some(project.trim().to_string());
        }
        if let Some(codebase) = lookup("FNSTAGE_CODEBASE").filter(|v| !v.trim().is_empty()) {
            self.functions.codebase = codebase.trim().to_string();
        }
        if let Some(source) = lookup("FNSTAGE_SOURCE").filter(|v| !v.trim().is_empty()) {
            self.functions.source = source.trim().to_string();
        }
        if let Some(verbosity) = lookup("FNSTAGE_VERBOSITY").and_then(|v| Verbosity::parse(&v)) {
            self.output.verbosity = verbosity;
        }
        self
    }
}
