//! Configuration module for fnstage
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FNSTAGE_*)
//! 3. Project config (./fnstage.toml)
//! 4. User config (<config dir>/fnstage/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, FunctionsConfig, OutputConfig, ProjectConfig, Verbosity};
