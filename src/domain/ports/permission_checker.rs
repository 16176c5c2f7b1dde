//! Permission checker port
//!
//! Verifies, before any upload, that the deploying principal may create
//! what the desired backend asks for (e.g. public HTTP invokers).

use async_trait::async_trait;

use super::RemoteResult;
use crate::config::Config;
use crate::domain::entities::{DeployContext, DeployPayload};

/// Capability pre-check run once per stage invocation
#[async_trait]
pub trait PermissionChecker: Send + Sync {
    /// Succeeds when every permission needed by `payload` is held
    async fn check_access(
        &self,
        context: &DeployContext,
        config: &Config,
        payload: &DeployPayload,
    ) -> RemoteResult<()>;
}

/// Checker that grants everything (local dry runs, tests)
pub struct AllowAllChecker;

#[async_trait]
impl PermissionChecker for AllowAllChecker {
    async fn check_access(
        &self,
        _context: &DeployContext,
        _config: &Config,
        _payload: &DeployPayload,
    ) -> RemoteResult<()> {
        Ok(())
    }
}
