//! Errors shared across crates.

use thiserror::Error;

/// Errors raised while parsing or constructing basic types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("amount overflow: {0}")]
    AmountOverflow(String),
}

/// A score fell outside the accepted `[0, 1000]` range.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    #[error("score must be <= {max}, got {score}")]
    OutOfRange { score: u64, max: u16 },
}

/// A capability check rejected the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("caller {0} is not the owner")]
    NotOwner(String),

    #[error("new owner is the zero address")]
    ZeroOwner,
}
