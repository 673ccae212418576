//! HushhCoin errors.

use hushh_types::{AccessError, TypeError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoinError {
    #[error("caller {0} is not authorized to mint")]
    NotAuthorized(String),

    #[error("mint to zero address")]
    MintToZeroAddress,

    #[error("amount must be greater than 0")]
    ZeroAmount,

    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("insufficient allowance: need {needed}, have {available}")]
    InsufficientAllowance { needed: u128, available: u128 },

    #[error("new authority is zero address")]
    ZeroAuthority,

    #[error("{0} to zero address")]
    ZeroAddress(&'static str),

    #[error("total supply overflow")]
    SupplyOverflow,

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Amount(#[from] TypeError),
}
