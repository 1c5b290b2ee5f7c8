//! # Operation Pool Subsystem
//!
//! In-memory staging pool for pending consensus operations awaiting block
//! inclusion: attestations, slashing proofs, voluntary exits, and deposits.
//! Operations are keyed by their content identity
//! ([`shared_types::HashTreeRoot`]), so the pool deduplicates structurally:
//! two arrivals of the same operation occupy one slot.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Every stored key equals the root of its value | `domain/pool.rs` - roots computed inside `add`/`batch_add` |
//! | INVARIANT-2 | One entry per distinct root | structural property of the map |
//! | INVARIANT-3 | `len()` equals the number of distinct roots present | map is the sole source of truth, no secondary index |
//! | INVARIANT-4 | Batches are externally all-or-nothing | guard held for the full batch extent |
//!
//! ## What the Pool Does Not Do
//!
//! Validation, ordering by priority or fee, size bounds, eviction, and
//! persistence all belong to the pool's consumers. The pool is pure working
//! state: it is created empty at subsystem start and discarded at shutdown.
//!
//! ## Concurrency
//!
//! The pool is a passive, internally synchronized structure. Ingestion,
//! block production, and API paths may all hold the same handle; every
//! operation completes in bounded time under a short `parking_lot` critical
//! section.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ports/inbound.rs  - OperationPoolApi driving port
//! domain/pool.rs    - OperationPool<T> keyed by content identity
//! domain/errors.rs  - OperationPoolError enum
//! ```

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;
