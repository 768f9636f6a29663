//! Domain models for Fleetgate.
//!
//! These are the core types shared across all crates.

pub mod role;
pub mod session;
