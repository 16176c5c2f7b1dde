//! Repository Implementations
//!
//! Loaders for the inputs the CLI reads from disk.

mod backend;

pub use backend::JsonBackendRepository;
