//! Identity registry: creation, brand scores, soulbound restrictions.

use std::collections::{BTreeMap, HashMap};

use hushh_types::{Address, Outcome, Ownership, Score, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::IdentityError;

/// Sequential identity token id, starting at 1.
pub type TokenId = u64;

/// Per-wallet identity data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub token_id: TokenId,
    pub brand_score: Score,
    pub created_at: Timestamp,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum IdentityEvent {
    IdentityCreated {
        wallet: Address,
        token_id: TokenId,
        timestamp: Timestamp,
    },
    BrandScoreUpdated {
        wallet: Address,
        previous: Score,
        new: Score,
        timestamp: Timestamp,
    },
    OwnershipTransferred {
        previous: Address,
        new: Address,
    },
}

/// HushhIdentity contract state.
///
/// `identities` and `holders` are mirror indexes: a wallet maps to its token
/// id exactly when that token id maps back to the wallet.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HushhIdentity {
    ownership: Ownership,
    identities: HashMap<Address, IdentityRecord>,
    holders: BTreeMap<TokenId, Address>,
}

impl HushhIdentity {
    pub const NAME: &'static str = "HushhIdentity";
    pub const SYMBOL: &'static str = "HUSHH-ID";

    pub fn new(owner: Address) -> Self {
        Self {
            ownership: Ownership::new(owner),
            identities: HashMap::new(),
            holders: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    pub fn symbol(&self) -> &'static str {
        Self::SYMBOL
    }

    pub fn owner(&self) -> Address {
        self.ownership.owner()
    }

    /// Hand the contract to `new_owner`. Owner only. Returns the previous owner.
    pub fn transfer_ownership(
        &mut self,
        caller: Address,
        new_owner: Address,
    ) -> Result<Outcome<Address, IdentityEvent>, IdentityError> {
        let previous = self.ownership.transfer(&caller, new_owner)?;
        tracing::info!(%previous, new = %new_owner, "identity ownership transferred");

        Ok(Outcome::with_event(
            previous,
            IdentityEvent::OwnershipTransferred {
                previous,
                new: new_owner,
            },
        ))
    }

    /// Mint the caller's identity token. One per wallet.
    pub fn create_identity(
        &mut self,
        caller: Address,
        now: Timestamp,
    ) -> Result<Outcome<TokenId, IdentityEvent>, IdentityError> {
        if self.identities.contains_key(&caller) {
            return Err(IdentityError::AlreadyExists(caller.to_string()));
        }
        let token_id = self.holders.len() as TokenId + 1;
        self.identities.insert(
            caller,
            IdentityRecord {
                token_id,
                brand_score: Score::ZERO,
                created_at: now,
            },
        );
        self.holders.insert(token_id, caller);
        tracing::debug!(wallet = %caller, token_id, "identity created");

        Ok(Outcome::with_event(
            token_id,
            IdentityEvent::IdentityCreated {
                wallet: caller,
                token_id,
                timestamp: now,
            },
        ))
    }

    /// Set a wallet's brand value score. Owner only.
    pub fn set_brand_value_score(
        &mut self,
        caller: Address,
        wallet: Address,
        score: u64,
        now: Timestamp,
    ) -> Result<Outcome<Score, IdentityEvent>, IdentityError> {
        self.ownership.ensure_owner(&caller)?;
        let record = self
            .identities
            .get_mut(&wallet)
            .ok_or_else(|| IdentityError::NoIdentity(wallet.to_string()))?;
        let new = Score::new(score).map_err(|_| IdentityError::ScoreOutOfRange(score))?;

        let previous = std::mem::replace(&mut record.brand_score, new);
        tracing::debug!(%wallet, %previous, %new, "brand score updated");

        Ok(Outcome::with_event(
            new,
            IdentityEvent::BrandScoreUpdated {
                wallet,
                previous,
                new,
                timestamp: now,
            },
        ))
    }

    // ── Views ──────────────────────────────────────────────────────────

    pub fn has_identity(&self, wallet: &Address) -> bool {
        self.identities.contains_key(wallet)
    }

    /// Same as [`has_identity`](Self::has_identity); kept under both names.
    pub fn check_identity(&self, wallet: &Address) -> bool {
        self.has_identity(wallet)
    }

    pub fn get_identity(&self, wallet: &Address) -> Result<&IdentityRecord, IdentityError> {
        self.identities
            .get(wallet)
            .ok_or_else(|| IdentityError::NoIdentity(wallet.to_string()))
    }

    pub fn get_token_id(&self, wallet: &Address) -> Result<TokenId, IdentityError> {
        self.get_identity(wallet).map(|r| r.token_id)
    }

    pub fn get_brand_value_score(&self, wallet: &Address) -> Result<Score, IdentityError> {
        self.get_identity(wallet).map(|r| r.brand_score)
    }

    /// Number of identity tokens a wallet holds: 0 or 1.
    pub fn balance_of(&self, wallet: &Address) -> u64 {
        u64::from(self.has_identity(wallet))
    }

    pub fn owner_of(&self, token_id: TokenId) -> Result<Address, IdentityError> {
        self.holders
            .get(&token_id)
            .copied()
            .ok_or(IdentityError::UnknownToken(token_id))
    }

    pub fn total_identities(&self) -> u64 {
        self.holders.len() as u64
    }

    // ── Soulbound restrictions ─────────────────────────────────────────

    pub fn transfer_from(
        &mut self,
        _caller: Address,
        _from: Address,
        _to: Address,
        _token_id: TokenId,
    ) -> Result<(), IdentityError> {
        Err(IdentityError::NotTransferable)
    }

    pub fn safe_transfer_from(
        &mut self,
        _caller: Address,
        _from: Address,
        _to: Address,
        _token_id: TokenId,
    ) -> Result<(), IdentityError> {
        Err(IdentityError::NotTransferable)
    }

    pub fn approve(
        &mut self,
        _caller: Address,
        _to: Address,
        _token_id: TokenId,
    ) -> Result<(), IdentityError> {
        Err(IdentityError::NotApprovable)
    }

    pub fn set_approval_for_all(
        &mut self,
        _caller: Address,
        _operator: Address,
        _approved: bool,
    ) -> Result<(), IdentityError> {
        Err(IdentityError::NotApprovable)
    }
}
