//! # Inbound Port - OperationPoolApi
//!
//! Primary driving port for the staging pool. Upstream producers (gossip
//! ingestion, local operation creation) push through `add`/`batch_add`;
//! consumers (block production, API layers) read through `get`/`get_all`
//! and drain through `remove`/`batch_remove` once operations are included,
//! finalized, or judged invalid.

use crate::domain::{OperationPool, OperationPoolError};
use shared_types::{HashTreeRoot, Root};

/// Primary API for an operation staging pool.
///
/// Mutations are total: upserts cannot fail and removals of absent entries
/// are no-ops. Only [`get`](Self::get) can fail, with `NotFound`.
pub trait OperationPoolApi<T: HashTreeRoot + Clone>: Send + Sync {
    /// Upserts an operation under its content root (last write wins).
    fn add(&self, operation: T);

    /// Upserts each operation in order, atomically with respect to
    /// concurrent readers.
    fn batch_add(&self, operations: Vec<T>);

    /// Removes the entry for this operation's root. No-op if absent.
    fn remove(&self, operation: &T);

    /// Removes each operation in order under a single guard.
    fn batch_remove(&self, operations: &[T]);

    /// Returns the operation stored under `root`.
    ///
    /// # Errors
    /// `NotFound` if the root is absent.
    fn get(&self, root: &Root) -> Result<T, OperationPoolError>;

    /// Consistent snapshot of all staged operations, unspecified order.
    fn get_all(&self) -> Vec<T>;

    /// Membership test by operation.
    fn contains(&self, operation: &T) -> bool;

    /// Membership test by precomputed root.
    fn contains_root(&self, root: &Root) -> bool;

    /// Number of distinct roots staged.
    fn len(&self) -> usize;

    /// Returns true if nothing is staged.
    fn is_empty(&self) -> bool;
}

impl<T: HashTreeRoot + Clone + Send> OperationPoolApi<T> for OperationPool<T> {
    fn add(&self, operation: T) {
        OperationPool::add(self, operation);
    }

    fn batch_add(&self, operations: Vec<T>) {
        OperationPool::batch_add(self, operations);
    }

    fn remove(&self, operation: &T) {
        OperationPool::remove(self, operation);
    }

    fn batch_remove(&self, operations: &[T]) {
        OperationPool::batch_remove(self, operations);
    }

    fn get(&self, root: &Root) -> Result<T, OperationPoolError> {
        OperationPool::get(self, root)
    }

    fn get_all(&self) -> Vec<T> {
        OperationPool::get_all(self)
    }

    fn contains(&self, operation: &T) -> bool {
        OperationPool::contains(self, operation)
    }

    fn contains_root(&self, root: &Root) -> bool {
        OperationPool::contains_root(self, root)
    }

    fn len(&self) -> usize {
        OperationPool::len(self)
    }

    fn is_empty(&self) -> bool {
        OperationPool::is_empty(self)
    }
}
