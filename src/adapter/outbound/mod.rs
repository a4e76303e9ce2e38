//! Outbound adapters (driven side).

pub mod json;
pub mod memory;
