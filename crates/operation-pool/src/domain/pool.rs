//! # Operation Pool - Content-Addressed Staging Map
//!
//! The core pool data structure: a guarded map from content root to the
//! single operation currently occupying that root.
//!
//! ## Invariants Enforced
//!
//! - INVARIANT-1: Key equals root of value (roots computed inside `add`)
//! - INVARIANT-2: One entry per distinct root (structural)
//! - INVARIANT-3: `len()` counts distinct roots (map is sole source of truth)
//! - INVARIANT-4: Batch mutations hold the guard for their full extent

use super::errors::OperationPoolError;
use parking_lot::Mutex;
use shared_types::{HashTreeRoot, Root};
use std::collections::HashMap;
use tracing::debug;

/// In-memory pool of pending operations keyed by content identity.
///
/// Generic over any operation type exposing [`HashTreeRoot`]. The pool never
/// inspects payloads beyond computing their root: validation, ordering, and
/// expiry are the callers' concern.
///
/// All methods take `&self`; the map is guarded by an internal mutex so a
/// single handle can be shared across ingestion and consumption paths.
#[derive(Debug)]
pub struct OperationPool<T> {
    storage: Mutex<HashMap<Root, T>>,
}

impl<T> Default for OperationPool<T> {
    fn default() -> Self {
        Self {
            storage: Mutex::new(HashMap::new()),
        }
    }
}

impl<T: HashTreeRoot + Clone> OperationPool<T> {
    /// Creates a new empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts an operation under its content root.
    ///
    /// Last write wins: if an operation with the same root is already
    /// present it is replaced, even when the payloads differ. Replacement
    /// is logged so silent overwrites stay observable.
    pub fn add(&self, operation: T) {
        let root = operation.hash_tree_root();
        let mut storage = self.storage.lock();
        Self::upsert(&mut storage, root, operation);
    }

    /// Applies [`add`](Self::add) to each operation in order.
    ///
    /// The guard is held for the whole batch, so concurrent readers observe
    /// either none or all of the batch. Individual upserts cannot fail.
    pub fn batch_add(&self, operations: impl IntoIterator<Item = T>) {
        let mut storage = self.storage.lock();
        for operation in operations {
            let root = operation.hash_tree_root();
            Self::upsert(&mut storage, root, operation);
        }
    }

    /// Removes the entry for this operation's root, if present.
    ///
    /// Absence is not an error.
    pub fn remove(&self, operation: &T) {
        let root = operation.hash_tree_root();
        self.storage.lock().remove(&root);
    }

    /// Applies [`remove`](Self::remove) to each operation in order, under a
    /// single guard.
    pub fn batch_remove<'a>(&self, operations: impl IntoIterator<Item = &'a T>)
    where
        T: 'a,
    {
        let mut storage = self.storage.lock();
        for operation in operations {
            storage.remove(&operation.hash_tree_root());
        }
    }

    /// Returns the operation stored under `root`.
    ///
    /// # Errors
    /// `NotFound` if no operation occupies the root. Callers that tolerate
    /// absence should use [`contains_root`](Self::contains_root) first.
    pub fn get(&self, root: &Root) -> Result<T, OperationPoolError> {
        self.storage
            .lock()
            .get(root)
            .cloned()
            .ok_or(OperationPoolError::NotFound(*root))
    }

    /// Returns a snapshot of all stored operations.
    ///
    /// Iteration order is unspecified. The snapshot is taken under the
    /// guard, so no operation appears twice or is skipped by a concurrent
    /// mutation.
    pub fn get_all(&self) -> Vec<T> {
        self.storage.lock().values().cloned().collect()
    }

    /// Membership test by operation (its root is computed here).
    pub fn contains(&self, operation: &T) -> bool {
        self.contains_root(&operation.hash_tree_root())
    }

    /// Membership test by precomputed root.
    pub fn contains_root(&self, root: &Root) -> bool {
        self.storage.lock().contains_key(root)
    }

    /// Number of distinct roots currently staged.
    pub fn len(&self) -> usize {
        self.storage.lock().len()
    }

    /// Returns true if the pool holds no operations.
    pub fn is_empty(&self) -> bool {
        self.storage.lock().is_empty()
    }

    fn upsert(storage: &mut HashMap<Root, T>, root: Root, operation: T) {
        if storage.insert(root, operation).is_some() {
            debug!(root = ?&root[..4], "replaced staged operation with same root");
        }
    }
}
