//! # Staging Pool Integration
//!
//! Exercises the pool semantics end to end across real operation types:
//! dedup by content identity, last-write-wins upserts, tolerant removal,
//! and snapshot consistency. Producers stage through the driving port the
//! way ingestion code does.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{attestation, exit};
    use operation_pool::{OperationPool, OperationPoolApi, OperationPoolError};
    use shared_types::{Deposit, DepositData, HashTreeRoot, ProposerSlashing};

    #[test]
    fn test_fresh_pool_reports_nothing() {
        let pool: OperationPool<shared_types::Attestation> = OperationPool::new();
        assert_eq!(pool.len(), 0);
        assert!(pool.get_all().is_empty());
        assert!(!pool.contains_root(&[0xFE; 32]));
    }

    #[test]
    fn test_stage_query_drain_cycle() {
        let pool = OperationPool::new();
        let att = attestation(12, 1);
        let root = att.hash_tree_root();

        // Stage (gossip ingestion path).
        pool.add(att.clone());
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(&root).unwrap(), att);

        // Drain after inclusion (block production path).
        pool.remove(&att);
        assert_eq!(pool.len(), 0);
        assert_eq!(pool.get(&root), Err(OperationPoolError::NotFound(root)));
    }

    #[test]
    fn test_duplicate_gossip_occupies_one_slot() {
        let pool = OperationPool::new();
        let att = attestation(5, 0);

        // The same aggregate arriving from three peers.
        pool.batch_add([att.clone(), att.clone(), att.clone()]);

        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get_all(), vec![att]);
    }

    #[test]
    fn test_batch_drain_tolerates_already_included() {
        let pool = OperationPool::new();
        let staged: Vec<_> = (0..4).map(exit).collect();
        pool.batch_add(staged.clone());

        // One operation was already drained by a competing consumer.
        pool.remove(&staged[0]);
        pool.batch_remove(staged.iter());

        assert!(pool.is_empty());
    }

    #[test]
    fn test_snapshot_len_agreement_across_types() {
        let exits = OperationPool::new();
        let deposits: OperationPool<Deposit> = OperationPool::new();

        exits.batch_add((0..16).map(exit));
        deposits.add(Deposit {
            proof: vec![[0x11; 32]; 33],
            data: DepositData {
                pubkey: [0x22; 48],
                withdrawal_credentials: [0x33; 32],
                amount: 32_000_000_000,
                signature: [0; 96],
            },
        });

        assert_eq!(exits.get_all().len(), exits.len());
        assert_eq!(deposits.get_all().len(), deposits.len());
        assert_eq!(exits.len(), 16);
        assert_eq!(deposits.len(), 1);
    }

    #[test]
    fn test_consumers_drive_through_port() {
        let pool: OperationPool<ProposerSlashing> = OperationPool::new();
        let api: &dyn OperationPoolApi<ProposerSlashing> = &pool;

        assert!(api.is_empty());
        assert_eq!(api.get_all(), Vec::<ProposerSlashing>::new());
    }
}
