//! # Beacon Operations
//!
//! Pending units of consensus work awaiting block inclusion: attestations,
//! proposer slashings, voluntary exits, and deposits.
//!
//! Every operation exposes a deterministic content identity via
//! [`HashTreeRoot`]. The identity is the SHA-256 digest of the operation's
//! canonical bincode encoding. Two operations with the same encoding always
//! produce the same root, so the root doubles as a deduplication key in an
//! adversarial network setting.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use sha2::{Digest, Sha256};

/// 32-byte content identity of an operation (or any hashed object).
pub type Root = [u8; 32];

/// Slot number on the beacon chain.
pub type Slot = u64;

/// Epoch number (groups of slots).
pub type Epoch = u64;

/// Index of a validator in the registry.
pub type ValidatorIndex = u64;

/// Raw BLS signature bytes (96-byte G2 point).
pub type SignatureBytes = [u8; 96];

/// Raw BLS public key bytes (48-byte G1 point).
pub type PublicKeyBytes = [u8; 48];

/// Deterministic, collision-resistant content identity.
///
/// The root is computed over the operation's canonical encoding, never over
/// incidental in-memory layout, so it is stable across processes and
/// architectures.
pub trait HashTreeRoot {
    /// Compute the content identity of this object.
    fn hash_tree_root(&self) -> Root;
}

/// SHA-256 over the canonical bincode encoding of a value.
///
/// Bincode with default options is deterministic for the plain structs in
/// this module: fixed-width integers, fixed-size arrays, and length-prefixed
/// vectors. Serialization of these types cannot fail.
pub fn canonical_root<T: Serialize>(value: &T) -> Root {
    let encoded =
        bincode::serialize(value).expect("canonical encoding of a plain operation struct");
    let digest = Sha256::digest(&encoded);
    digest.into()
}

/// A checkpoint the attestation votes for (epoch boundary block).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub epoch: Epoch,
    pub root: Root,
}

/// The vote carried by an attestation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationData {
    /// Slot the attestation is for.
    pub slot: Slot,
    /// Committee index within the slot.
    pub committee_index: u64,
    /// Block root the validator saw at the head.
    pub beacon_block_root: Root,
    /// Last justified checkpoint.
    pub source: Checkpoint,
    /// Checkpoint being justified by this vote.
    pub target: Checkpoint,
}

/// An aggregated attestation from a committee.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attestation {
    /// Bitfield of committee members included in the aggregate.
    pub aggregation_bits: Vec<u8>,
    pub data: AttestationData,
    #[serde_as(as = "Bytes")]
    pub signature: SignatureBytes,
}

impl HashTreeRoot for Attestation {
    fn hash_tree_root(&self) -> Root {
        canonical_root(self)
    }
}

/// Minimal block header, used as slashing evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconBlockHeader {
    pub slot: Slot,
    pub proposer_index: ValidatorIndex,
    pub parent_root: Root,
    pub state_root: Root,
    pub body_root: Root,
}

/// A block header together with the proposer's signature over it.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedBeaconBlockHeader {
    pub message: BeaconBlockHeader,
    #[serde_as(as = "Bytes")]
    pub signature: SignatureBytes,
}

/// Evidence that a proposer signed two distinct headers for the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposerSlashing {
    pub signed_header_1: SignedBeaconBlockHeader,
    pub signed_header_2: SignedBeaconBlockHeader,
}

impl HashTreeRoot for ProposerSlashing {
    fn hash_tree_root(&self) -> Root {
        canonical_root(self)
    }
}

/// A validator's request to leave the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoluntaryExit {
    /// Earliest epoch at which the exit may be processed.
    pub epoch: Epoch,
    pub validator_index: ValidatorIndex,
}

/// A voluntary exit with the validator's signature.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedVoluntaryExit {
    pub message: VoluntaryExit,
    #[serde_as(as = "Bytes")]
    pub signature: SignatureBytes,
}

impl HashTreeRoot for SignedVoluntaryExit {
    fn hash_tree_root(&self) -> Root {
        canonical_root(self)
    }
}

/// The data a depositor commits to on the deposit contract.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositData {
    #[serde_as(as = "Bytes")]
    pub pubkey: PublicKeyBytes,
    pub withdrawal_credentials: Root,
    /// Deposit amount in Gwei.
    pub amount: u64,
    #[serde_as(as = "Bytes")]
    pub signature: SignatureBytes,
}

/// A deposit with its Merkle proof against the deposit contract root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    pub proof: Vec<Root>,
    pub data: DepositData,
}

impl HashTreeRoot for Deposit {
    fn hash_tree_root(&self) -> Root {
        canonical_root(self)
    }
}
