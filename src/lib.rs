//! Rollup todo: a client for an on-chain task list.
//!
//! Task titles and content references live in a smart contract; the long
//! description text lives in an external content store. This crate keeps a
//! local view of the contract's tasks in sync, enriches each task with its
//! description, and drives the create and delete flows through signing,
//! submission, and confirmation.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Task records, identifiers, and board view state
//! - **Ports**: Contract, content store, and wallet interfaces
//! - **Adapters**: JSON-RPC, HTTP, and in-memory implementations
//!
//! # Modules
//!
//! - [`task`]: Sync, lifecycle, and board services for the task list
//! - [`config`]: Command-line and environment settings
//! - [`render`]: Text rendering of the task list
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod render;
pub mod task;
pub mod telemetry;
