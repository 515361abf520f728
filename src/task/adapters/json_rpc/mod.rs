//! Ethereum JSON-RPC binding for the todo contract.

pub mod abi;
mod contract;

pub use contract::JsonRpcTodoContract;
