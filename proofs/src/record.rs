//! Proof records and the events the registry emits.

use hushh_types::{Address, Timestamp};
use serde::{Deserialize, Serialize};

/// Sequential proof identifier, starting at 1.
pub type ProofId = u64;

/// A stored proof.
///
/// Immutable after creation except for `verified`, which only moves false → true.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofRecord {
    pub id: ProofId,
    pub prover: Address,
    pub statement: String,
    pub verified: bool,
    pub created_at: Timestamp,
}

/// What `generate_proof` hands back to the prover.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedProof {
    pub id: ProofId,
    pub statement: String,
}

/// Notifications emitted by the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ProofEvent {
    /// A new proof was stored.
    ProofGenerated {
        prover: Address,
        id: ProofId,
        statement: String,
        timestamp: Timestamp,
    },
    /// A proof was (re-)verified.
    ProofVerified {
        verifier: Address,
        id: ProofId,
        timestamp: Timestamp,
    },
    /// The registry changed hands.
    OwnershipTransferred { previous: Address, new: Address },
}
