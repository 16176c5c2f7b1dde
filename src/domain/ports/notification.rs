//! Notification Port
//!
//! User-facing success and warning lines emitted by deploy stages.
//! Fire-and-forget: sinks never report back.

/// Trait for receiving user-facing notices
///
/// Implementations can be:
/// - TracingNotifier: routes notices through `tracing`
/// - NoopNotifier: Silent operation
pub trait NotificationSink: Send + Sync {
    /// A stage finished successfully
    fn log_success(&self, message: &str);

    /// A stage failed or degraded
    fn log_warning(&self, message: &str);
}

/// No-op sink for silent operation
pub struct NoopNotifier;

impl NotificationSink for NoopNotifier {
    fn log_success(&self, _message: &str) {}

    fn log_warning(&self, _message: &str) {}
}
