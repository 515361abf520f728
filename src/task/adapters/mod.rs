//! Adapter implementations for task list ports.

pub mod http;
pub mod json_rpc;
pub mod memory;
