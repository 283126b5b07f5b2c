//! Rent renewal assessment for Dubai leases.
//!
//! The library computes whether a landlord may raise the rent at renewal
//! under Decree 43/2013, validates the 90-day notice requirement, grades the
//! dispute risk, and hands the structured outcome to an external generative
//! collaborator for advisory text. The core engine is pure; every network
//! concern lives behind the advisory boundary.

pub mod config;
pub mod error;
pub mod renewal;
pub mod telemetry;
