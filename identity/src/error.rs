//! HushhIdentity errors.

use hushh_types::AccessError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("identity already exists for {0}")]
    AlreadyExists(String),

    #[error("wallet {0} has no identity")]
    NoIdentity(String),

    #[error("token {0} does not exist")]
    UnknownToken(u64),

    #[error("score must be <= 1000, got {0}")]
    ScoreOutOfRange(u64),

    #[error("soulbound tokens cannot be transferred")]
    NotTransferable,

    #[error("soulbound tokens cannot be approved")]
    NotApprovable,

    #[error(transparent)]
    Access(#[from] AccessError),
}
