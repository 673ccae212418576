//! Ownership capability checks.
//!
//! Privileged contract calls evaluate an explicit predicate against the caller
//! before any state is touched, instead of inheriting an "ownable" base.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::AccessError;

/// The single account allowed to perform owner-gated calls on a contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ownership {
    owner: Address,
}

impl Ownership {
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn is_owner(&self, caller: &Address) -> bool {
        &self.owner == caller
    }

    /// Fail unless `caller` is the current owner.
    pub fn ensure_owner(&self, caller: &Address) -> Result<(), AccessError> {
        if self.is_owner(caller) {
            Ok(())
        } else {
            Err(AccessError::NotOwner(caller.to_string()))
        }
    }

    /// Hand ownership to `new_owner`. Returns the previous owner.
    pub fn transfer(&mut self, caller: &Address, new_owner: Address) -> Result<Address, AccessError> {
        self.ensure_owner(caller)?;
        if new_owner.is_zero() {
            return Err(AccessError::ZeroOwner);
        }
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }
}
