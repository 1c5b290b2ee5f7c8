//! # Concurrency Invariants
//!
//! The pool is shared by ingestion, block production, and API paths at the
//! same time. These tests interleave real threads and assert the pool never
//! exposes a torn state: the reported length always agrees with what is
//! actually retrievable, and batches are observed all-or-nothing.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::exit;
    use operation_pool::OperationPool;
    use rand::Rng;
    use shared_types::HashTreeRoot;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_concurrent_adds_and_removes_stay_consistent() {
        let pool = Arc::new(OperationPool::new());

        std::thread::scope(|scope| {
            // Four producers staging overlapping ranges of validators.
            for producer in 0..4u64 {
                let pool = Arc::clone(&pool);
                scope.spawn(move || {
                    let mut rng = rand::thread_rng();
                    for _ in 0..500 {
                        let index = rng.gen_range(producer * 50..(producer + 2) * 50);
                        pool.add(exit(index));
                    }
                });
            }
            // Two consumers draining random indices from the shared range.
            for _ in 0..2 {
                let pool = Arc::clone(&pool);
                scope.spawn(move || {
                    let mut rng = rand::thread_rng();
                    for _ in 0..500 {
                        let index = rng.gen_range(0..250);
                        pool.remove(&exit(index));
                    }
                });
            }
        });

        // Whatever survived: every snapshot entry must be retrievable under
        // its own root, and the count must agree with the snapshot.
        let snapshot = pool.get_all();
        assert_eq!(snapshot.len(), pool.len());
        for op in &snapshot {
            assert_eq!(pool.get(&op.hash_tree_root()).unwrap(), *op);
        }
    }

    #[test]
    fn test_batches_are_observed_all_or_nothing() {
        const BATCH: usize = 32;

        let pool = Arc::new(OperationPool::new());
        let done = Arc::new(AtomicBool::new(false));
        let ops: Vec<_> = (0..BATCH as u64).map(exit).collect();

        std::thread::scope(|scope| {
            {
                let pool = Arc::clone(&pool);
                let done = Arc::clone(&done);
                let ops = ops.clone();
                scope.spawn(move || {
                    for _ in 0..200 {
                        pool.batch_add(ops.clone());
                        pool.batch_remove(ops.iter());
                    }
                    done.store(true, Ordering::Release);
                });
            }

            let pool = Arc::clone(&pool);
            let done = Arc::clone(&done);
            scope.spawn(move || {
                while !done.load(Ordering::Acquire) {
                    let observed = pool.len();
                    assert!(
                        observed == 0 || observed == BATCH,
                        "observed partial batch of {observed} operations"
                    );
                }
            });
        });

        assert!(pool.is_empty());
    }

    #[test]
    fn test_concurrent_duplicate_staging_keeps_one_slot() {
        let pool = Arc::new(OperationPool::new());
        let op = exit(42);

        std::thread::scope(|scope| {
            for _ in 0..8 {
                let pool = Arc::clone(&pool);
                let op = op.clone();
                scope.spawn(move || {
                    for _ in 0..100 {
                        pool.add(op.clone());
                    }
                });
            }
        });

        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(&op.hash_tree_root()).unwrap(), op);
    }
}
