//! Ports: the contracts through which other subsystems drive the pool.

pub mod inbound;

pub use inbound::OperationPoolApi;
