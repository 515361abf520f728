//! On-chain task list management.
//!
//! This module keeps a local copy of the contract's task list, enriching
//! each record with description text fetched from the content store, and
//! runs the create and delete flows: upload, submit, wait for
//! confirmation, resync. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
