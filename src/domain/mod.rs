//! Domain Layer
//!
//! Pure deploy-stage logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Endpoint, Backend, packaged sources, deploy context
//! - `value_objects/` - Immutable value types (Fingerprint, Platform)
//! - `services/` - Fingerprint engine and upload planner
//! - `ports/` - Interfaces for remote collaborators
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
