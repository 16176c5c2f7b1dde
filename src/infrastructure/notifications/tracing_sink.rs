//! Tracing Notification Sink
//!
//! Routes stage notices through `tracing`, so they share the subscriber,
//! filtering and formatting of every other log line.

use tracing::{info, warn};

use crate::domain::ports::NotificationSink;

/// Notification sink that emits `info!` for successes, `warn!` for warnings
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSink for TracingNotifier {
    fn log_success(&self, message: &str) {
        info!(target: "fnstage::notice", "{message}");
    }

    fn log_warning(&self, message: &str) {
        warn!(target: "fnstage::notice", "{message}");
    }
}
