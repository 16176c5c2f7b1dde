//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod fingerprint;
mod platform;

pub use fingerprint::Fingerprint;
pub use platform::Platform;
