//! Outbound adapters (driven side).

pub mod memory;
pub mod postgres;
