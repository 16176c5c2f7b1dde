//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `notifications/` - Notification sinks (Tracing, Noop)
//! - `repositories/` - Repository implementations (Backend manifest)
//!
//! Remote platform clients are supplied by the embedding deploy tool; the
//! upload use case only sees them through the domain ports.

pub mod notifications;
pub mod repositories;

// Re-export for convenience
pub use notifications::{NoopNotifier, TracingNotifier};
pub use repositories::JsonBackendRepository;
