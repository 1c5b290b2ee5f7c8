//! Operation pool error types.
//!
//! Only lookups can fail; every mutation on the pool is total.

use shared_types::Root;
use thiserror::Error;

/// Operation pool error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationPoolError {
    /// No operation is stored under the requested root.
    #[error("operation not found: {0:02x?}")]
    NotFound(Root),
}
