//! Proof registry errors.

use hushh_types::AccessError;
use thiserror::Error;

use crate::record::ProofId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProofError {
    #[error("score must be <= 1000, got {score}")]
    OutOfRange { score: u64 },

    #[error("proof {0} does not exist")]
    NotFound(ProofId),

    #[error(transparent)]
    Access(#[from] AccessError),
}
