//! Ledger-level error type aggregating every contract's errors.

use hushh_coin::CoinError;
use hushh_identity::IdentityError;
use hushh_proofs::ProofError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("HushhCoin: {0}")]
    Coin(#[from] CoinError),

    #[error("HushhIdentity: {0}")]
    Identity(#[from] IdentityError),

    #[error("ZKMockProof: {0}")]
    Proof(#[from] ProofError),

    #[error("config error: {0}")]
    Config(String),
}
