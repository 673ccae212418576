//! Transactions and the calls they carry.

use hushh_identity::TokenId;
use hushh_proofs::{GeneratedProof, ProofId};
use hushh_types::{Address, Score, TokenAmount};
use serde::{Deserialize, Serialize};

/// A call attributed to the account that submitted it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub caller: Address,
    pub call: Call,
}

impl Transaction {
    pub fn new(caller: Address, call: Call) -> Self {
        Self { caller, call }
    }
}

/// One of the hosted contracts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Contract {
    #[serde(rename = "HushhCoin")]
    Coin,
    #[serde(rename = "HushhIdentity")]
    Identity,
    #[serde(rename = "ZKMockProof")]
    Proofs,
}

impl Contract {
    pub const ALL: [Contract; 3] = [Self::Coin, Self::Identity, Self::Proofs];

    pub fn name(self) -> &'static str {
        match self {
            Self::Coin => "HushhCoin",
            Self::Identity => "HushhIdentity",
            Self::Proofs => "ZKMockProof",
        }
    }
}

/// Every state-mutating entry point of the hosted contracts.
///
/// Coin amounts are raw units except `Mint`, which takes whole tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Call {
    /// Owner-gated handover of any one contract.
    TransferOwnership {
        contract: Contract,
        new_owner: Address,
    },

    // HushhCoin
    Mint {
        to: Address,
        amount: u128,
    },
    Burn {
        amount: TokenAmount,
    },
    BurnFrom {
        from: Address,
        amount: TokenAmount,
    },
    Transfer {
        to: Address,
        amount: TokenAmount,
    },
    Approve {
        spender: Address,
        amount: TokenAmount,
    },
    TransferFrom {
        from: Address,
        to: Address,
        amount: TokenAmount,
    },
    SetReserveAuthority {
        authority: Address,
    },

    // HushhIdentity
    CreateIdentity,
    SetBrandValueScore {
        wallet: Address,
        score: u64,
    },
    TransferIdentity {
        from: Address,
        to: Address,
        token_id: TokenId,
    },
    SafeTransferIdentity {
        from: Address,
        to: Address,
        token_id: TokenId,
    },
    ApproveIdentity {
        to: Address,
        token_id: TokenId,
    },
    SetIdentityApprovalForAll {
        operator: Address,
        approved: bool,
    },

    // ZKMockProof
    GenerateProof {
        score: u64,
    },
    BatchGenerateProofs {
        scores: Vec<u64>,
    },
    VerifyProof {
        id: ProofId,
    },
}

impl Call {
    /// The contract this call targets.
    pub fn contract(&self) -> Contract {
        match self {
            Self::TransferOwnership { contract, .. } => *contract,
            Self::Mint { .. }
            | Self::Burn { .. }
            | Self::BurnFrom { .. }
            | Self::Transfer { .. }
            | Self::Approve { .. }
            | Self::TransferFrom { .. }
            | Self::SetReserveAuthority { .. } => Contract::Coin,
            Self::CreateIdentity
            | Self::SetBrandValueScore { .. }
            | Self::TransferIdentity { .. }
            | Self::SafeTransferIdentity { .. }
            | Self::ApproveIdentity { .. }
            | Self::SetIdentityApprovalForAll { .. } => Contract::Identity,
            Self::GenerateProof { .. }
            | Self::BatchGenerateProofs { .. }
            | Self::VerifyProof { .. } => Contract::Proofs,
        }
    }
}

/// The value a successful call returns to its caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallOutput {
    Unit,
    Flag(bool),
    Amount(TokenAmount),
    Account(Address),
    TokenId(TokenId),
    Score(Score),
    Proof(GeneratedProof),
    ProofIds(Vec<ProofId>),
}
