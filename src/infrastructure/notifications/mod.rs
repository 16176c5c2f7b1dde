//! Notification Sink Implementations
//!
//! Provides concrete implementations of NotificationSink:
//! - TracingNotifier: notices as `tracing` events
//! - NoopNotifier: re-exported from the port for silent runs

mod tracing_sink;

pub use crate::domain::ports::NoopNotifier;
pub use tracing_sink::TracingNotifier;
