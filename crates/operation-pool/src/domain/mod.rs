//! Domain layer: the pool itself and its error type.

pub mod errors;
pub mod pool;

pub use errors::OperationPoolError;
pub use pool::OperationPool;
