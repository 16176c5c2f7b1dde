//! Command handlers

pub mod hash;
pub mod plan;
