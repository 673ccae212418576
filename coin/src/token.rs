//! HushhCoin token state and operations.

use std::collections::HashMap;

use hushh_types::{Address, Outcome, Ownership, Timestamp, TokenAmount};
use serde::{Deserialize, Serialize};

use crate::error::CoinError;
use crate::event::CoinEvent;

/// HushhCoin contract state.
///
/// Invariant: the sum of all balances equals `total_supply`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HushhCoin {
    ownership: Ownership,
    reserve_authority: Address,
    total_supply: TokenAmount,
    balances: HashMap<Address, TokenAmount>,
    /// holder → spender → remaining allowance.
    allowances: HashMap<Address, HashMap<Address, TokenAmount>>,
}

impl HushhCoin {
    pub const NAME: &'static str = "HushhCoin";
    pub const SYMBOL: &'static str = "HUSHH";

    /// Deploy with `owner` as both owner and initial reserve authority.
    pub fn new(owner: Address) -> Self {
        Self {
            ownership: Ownership::new(owner),
            reserve_authority: owner,
            total_supply: TokenAmount::ZERO,
            balances: HashMap::new(),
            allowances: HashMap::new(),
        }
    }

    // ── Views ──────────────────────────────────────────────────────────

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    pub fn symbol(&self) -> &'static str {
        Self::SYMBOL
    }

    pub fn decimals(&self) -> u8 {
        TokenAmount::DECIMALS
    }

    pub fn owner(&self) -> Address {
        self.ownership.owner()
    }

    pub fn reserve_authority(&self) -> Address {
        self.reserve_authority
    }

    pub fn total_supply(&self) -> TokenAmount {
        self.total_supply
    }

    /// Total supply in whole tokens.
    pub fn total_supply_human(&self) -> u128 {
        self.total_supply.whole()
    }

    pub fn balance_of(&self, holder: &Address) -> TokenAmount {
        self.balances.get(holder).copied().unwrap_or_default()
    }

    /// Balance in whole tokens.
    pub fn balance_of_human(&self, holder: &Address) -> u128 {
        self.balance_of(holder).whole()
    }

    pub fn allowance(&self, holder: &Address, spender: &Address) -> TokenAmount {
        self.allowances
            .get(holder)
            .and_then(|m| m.get(spender))
            .copied()
            .unwrap_or_default()
    }

    /// Whether `caller` may mint: the owner or the reserve authority.
    pub fn can_mint(&self, caller: &Address) -> bool {
        self.ownership.is_owner(caller) || &self.reserve_authority == caller
    }

    // ── Supply ─────────────────────────────────────────────────────────

    /// Mint `whole_amount` whole tokens to `to`. Returns the raw amount credited.
    pub fn mint(
        &mut self,
        caller: Address,
        to: Address,
        whole_amount: u128,
        now: Timestamp,
    ) -> Result<Outcome<TokenAmount, CoinEvent>, CoinError> {
        if !self.can_mint(&caller) {
            return Err(CoinError::NotAuthorized(caller.to_string()));
        }
        if to.is_zero() {
            return Err(CoinError::MintToZeroAddress);
        }
        if whole_amount == 0 {
            return Err(CoinError::ZeroAmount);
        }
        let amount = TokenAmount::from_whole(whole_amount)?;
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(CoinError::SupplyOverflow)?;

        self.total_supply = supply;
        self.credit(to, amount);
        tracing::debug!(%caller, %to, %amount, "tokens minted");

        Ok(Outcome::new(
            amount,
            vec![
                CoinEvent::Transfer {
                    from: Address::ZERO,
                    to,
                    amount,
                },
                CoinEvent::TokensMinted {
                    to,
                    amount,
                    timestamp: now,
                },
            ],
        ))
    }

    /// Burn `amount` raw units from the caller's own balance.
    pub fn burn(
        &mut self,
        caller: Address,
        amount: TokenAmount,
        now: Timestamp,
    ) -> Result<Outcome<(), CoinEvent>, CoinError> {
        if amount.is_zero() {
            return Err(CoinError::ZeroAmount);
        }
        self.ensure_balance(&caller, amount)?;
        Ok(self.destroy(caller, amount, now))
    }

    /// Burn `amount` raw units from `from`, spending the caller's allowance.
    pub fn burn_from(
        &mut self,
        caller: Address,
        from: Address,
        amount: TokenAmount,
        now: Timestamp,
    ) -> Result<Outcome<(), CoinEvent>, CoinError> {
        if amount.is_zero() {
            return Err(CoinError::ZeroAmount);
        }
        let remaining = self.remaining_allowance(&from, &caller, amount)?;
        self.ensure_balance(&from, amount)?;

        self.set_allowance(from, caller, remaining);
        Ok(self.destroy(from, amount, now))
    }

    fn destroy(
        &mut self,
        from: Address,
        amount: TokenAmount,
        now: Timestamp,
    ) -> Outcome<(), CoinEvent> {
        self.debit(from, amount);
        self.total_supply = TokenAmount::new(self.total_supply.raw() - amount.raw());
        tracing::debug!(%from, %amount, "tokens burned");

        Outcome::new(
            (),
            vec![
                CoinEvent::Transfer {
                    from,
                    to: Address::ZERO,
                    amount,
                },
                CoinEvent::TokensBurned {
                    from,
                    amount,
                    timestamp: now,
                },
            ],
        )
    }

    // ── Transfers and allowances ───────────────────────────────────────

    pub fn transfer(
        &mut self,
        caller: Address,
        to: Address,
        amount: TokenAmount,
    ) -> Result<Outcome<bool, CoinEvent>, CoinError> {
        if to.is_zero() {
            return Err(CoinError::ZeroAddress("transfer"));
        }
        self.ensure_balance(&caller, amount)?;
        Ok(self.move_balance(caller, to, amount))
    }

    /// Set `spender`'s allowance over the caller's balance, replacing any previous value.
    pub fn approve(
        &mut self,
        caller: Address,
        spender: Address,
        amount: TokenAmount,
    ) -> Result<Outcome<bool, CoinEvent>, CoinError> {
        if spender.is_zero() {
            return Err(CoinError::ZeroAddress("approve"));
        }
        self.set_allowance(caller, spender, amount);
        Ok(Outcome::with_event(
            true,
            CoinEvent::Approval {
                holder: caller,
                spender,
                amount,
            },
        ))
    }

    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: TokenAmount,
    ) -> Result<Outcome<bool, CoinEvent>, CoinError> {
        if to.is_zero() {
            return Err(CoinError::ZeroAddress("transfer"));
        }
        let remaining = self.remaining_allowance(&from, &caller, amount)?;
        self.ensure_balance(&from, amount)?;

        self.set_allowance(from, caller, remaining);
        Ok(self.move_balance(from, to, amount))
    }

    fn move_balance(
        &mut self,
        from: Address,
        to: Address,
        amount: TokenAmount,
    ) -> Outcome<bool, CoinEvent> {
        self.debit(from, amount);
        self.credit(to, amount);
        tracing::debug!(%from, %to, %amount, "tokens transferred");
        Outcome::with_event(true, CoinEvent::Transfer { from, to, amount })
    }

    // ── Roles ──────────────────────────────────────────────────────────

    /// Replace the reserve authority. Owner only. Returns the previous authority.
    pub fn set_reserve_authority(
        &mut self,
        caller: Address,
        new_authority: Address,
    ) -> Result<Outcome<Address, CoinEvent>, CoinError> {
        self.ownership.ensure_owner(&caller)?;
        if new_authority.is_zero() {
            return Err(CoinError::ZeroAuthority);
        }
        let previous = std::mem::replace(&mut self.reserve_authority, new_authority);
        tracing::info!(%previous, new = %new_authority, "reserve authority updated");

        Ok(Outcome::with_event(
            previous,
            CoinEvent::ReserveAuthorityUpdated {
                previous,
                new: new_authority,
            },
        ))
    }

    /// Hand the contract to `new_owner`. Owner only. Returns the previous owner.
    ///
    /// The reserve authority is left as it is.
    pub fn transfer_ownership(
        &mut self,
        caller: Address,
        new_owner: Address,
    ) -> Result<Outcome<Address, CoinEvent>, CoinError> {
        let previous = self.ownership.transfer(&caller, new_owner)?;
        tracing::info!(%previous, new = %new_owner, "coin ownership transferred");

        Ok(Outcome::with_event(
            previous,
            CoinEvent::OwnershipTransferred {
                previous,
                new: new_owner,
            },
        ))
    }

    // ── Internals ──────────────────────────────────────────────────────

    fn ensure_balance(&self, holder: &Address, amount: TokenAmount) -> Result<(), CoinError> {
        let available = self.balance_of(holder);
        if available < amount {
            return Err(CoinError::InsufficientBalance {
                needed: amount.raw(),
                available: available.raw(),
            });
        }
        Ok(())
    }

    /// Allowance left after spending `amount`, without mutating anything.
    fn remaining_allowance(
        &self,
        holder: &Address,
        spender: &Address,
        amount: TokenAmount,
    ) -> Result<TokenAmount, CoinError> {
        let available = self.allowance(holder, spender);
        available
            .checked_sub(amount)
            .ok_or(CoinError::InsufficientAllowance {
                needed: amount.raw(),
                available: available.raw(),
            })
    }

    fn set_allowance(&mut self, holder: Address, spender: Address, amount: TokenAmount) {
        self.allowances
            .entry(holder)
            .or_default()
            .insert(spender, amount);
    }

    /// Callers check the balance first.
    fn debit(&mut self, holder: Address, amount: TokenAmount) {
        let balance = self.balances.entry(holder).or_default();
        *balance = TokenAmount::new(balance.raw() - amount.raw());
    }

    /// Balances never exceed total supply, so this cannot overflow.
    fn credit(&mut self, holder: Address, amount: TokenAmount) {
        let balance = self.balances.entry(holder).or_default();
        *balance = TokenAmount::new(balance.raw() + amount.raw());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hushh_types::AccessError;

    fn addr(s: &str) -> Address {
        Address::derive(s)
    }

    fn whole(n: u128) -> TokenAmount {
        TokenAmount::from_whole(n).unwrap()
    }

    fn now() -> Timestamp {
        Timestamp::new(1_700_000_000)
    }

    fn coin() -> HushhCoin {
        HushhCoin::new(addr("owner"))
    }

    fn funded(holder: &str, amount: u128) -> HushhCoin {
        let mut c = coin();
        c.mint(addr("owner"), addr(holder), amount, now()).unwrap();
        c
    }

    #[test]
    fn deployment_metadata() {
        let c = coin();
        assert_eq!(c.name(), "HushhCoin");
        assert_eq!(c.symbol(), "HUSHH");
        assert_eq!(c.decimals(), 18);
        assert_eq!(c.owner(), addr("owner"));
        assert_eq!(c.reserve_authority(), addr("owner"));
        assert_eq!(c.total_supply(), TokenAmount::ZERO);
    }

    #[test]
    fn owner_mints_scaled_amount() {
        let mut c = coin();
        let out = c.mint(addr("owner"), addr("user1"), 100, now()).unwrap();
        assert_eq!(out.value, whole(100));
        assert_eq!(c.balance_of(&addr("user1")), whole(100));
        assert_eq!(c.balance_of_human(&addr("user1")), 100);
        assert_eq!(c.total_supply(), whole(100));
    }

    #[test]
    fn mint_emits_tokens_minted() {
        let mut c = coin();
        let out = c.mint(addr("owner"), addr("user1"), 100, now()).unwrap();
        assert!(out.events.contains(&CoinEvent::TokensMinted {
            to: addr("user1"),
            amount: whole(100),
            timestamp: now(),
        }));
    }

    #[test]
    fn reserve_authority_can_mint() {
        let mut c = coin();
        c.set_reserve_authority(addr("owner"), addr("reserve")).unwrap();
        c.mint(addr("reserve"), addr("user1"), 50, now()).unwrap();
        assert_eq!(c.balance_of(&addr("user1")), whole(50));
    }

    #[test]
    fn stranger_cannot_mint() {
        let mut c = coin();
        let err = c.mint(addr("user1"), addr("user2"), 100, now()).unwrap_err();
        assert!(matches!(err, CoinError::NotAuthorized(_)));
        assert_eq!(c.total_supply(), TokenAmount::ZERO);
    }

    #[test]
    fn mint_rejects_zero_address_and_amount() {
        let mut c = coin();
        assert_eq!(
            c.mint(addr("owner"), Address::ZERO, 100, now()).unwrap_err(),
            CoinError::MintToZeroAddress
        );
        assert_eq!(
            c.mint(addr("owner"), addr("user1"), 0, now()).unwrap_err(),
            CoinError::ZeroAmount
        );
    }

    #[test]
    fn mint_rejects_overflow() {
        let mut c = coin();
        let max_whole = u128::MAX / TokenAmount::UNIT;
        c.mint(addr("owner"), addr("user1"), max_whole, now()).unwrap();
        let err = c.mint(addr("owner"), addr("user1"), max_whole, now()).unwrap_err();
        assert_eq!(err, CoinError::SupplyOverflow);
        assert_eq!(c.balance_of_human(&addr("user1")), max_whole);
    }

    #[test]
    fn holder_burns_own_tokens() {
        let mut c = funded("user1", 100);
        let out = c.burn(addr("user1"), whole(50), now()).unwrap();
        assert_eq!(c.balance_of(&addr("user1")), whole(50));
        assert_eq!(c.total_supply(), whole(50));
        assert!(out
            .events
            .iter()
            .any(|e| matches!(e, CoinEvent::TokensBurned { .. })));
    }

    #[test]
    fn burn_more_than_balance_fails() {
        let mut c = funded("user1", 100);
        let err = c.burn(addr("user1"), whole(200), now()).unwrap_err();
        assert!(matches!(err, CoinError::InsufficientBalance { .. }));
        assert_eq!(c.balance_of(&addr("user1")), whole(100));
    }

    #[test]
    fn burn_zero_fails() {
        let mut c = funded("user1", 100);
        assert_eq!(
            c.burn(addr("user1"), TokenAmount::ZERO, now()).unwrap_err(),
            CoinError::ZeroAmount
        );
    }

    #[test]
    fn burn_from_spends_allowance() {
        let mut c = funded("user1", 100);
        c.approve(addr("user1"), addr("user2"), whole(30)).unwrap();
        c.burn_from(addr("user2"), addr("user1"), whole(30), now())
            .unwrap();
        assert_eq!(c.balance_of(&addr("user1")), whole(70));
        assert_eq!(c.allowance(&addr("user1"), &addr("user2")), TokenAmount::ZERO);
        assert_eq!(c.total_supply(), whole(70));
    }

    #[test]
    fn burn_from_without_allowance_fails() {
        let mut c = funded("user1", 100);
        let err = c
            .burn_from(addr("user2"), addr("user1"), whole(1), now())
            .unwrap_err();
        assert!(matches!(err, CoinError::InsufficientAllowance { .. }));
        assert_eq!(c.balance_of(&addr("user1")), whole(100));
    }

    #[test]
    fn owner_updates_reserve_authority() {
        let mut c = coin();
        let out = c
            .set_reserve_authority(addr("owner"), addr("reserve"))
            .unwrap();
        assert_eq!(c.reserve_authority(), addr("reserve"));
        assert_eq!(
            out.events,
            vec![CoinEvent::ReserveAuthorityUpdated {
                previous: addr("owner"),
                new: addr("reserve"),
            }]
        );
    }

    #[test]
    fn stranger_cannot_update_reserve_authority() {
        let mut c = coin();
        let err = c
            .set_reserve_authority(addr("user1"), addr("reserve"))
            .unwrap_err();
        assert!(matches!(err, CoinError::Access(AccessError::NotOwner(_))));
        assert_eq!(c.reserve_authority(), addr("owner"));
    }

    #[test]
    fn reserve_authority_cannot_be_zero() {
        let mut c = coin();
        assert_eq!(
            c.set_reserve_authority(addr("owner"), Address::ZERO)
                .unwrap_err(),
            CoinError::ZeroAuthority
        );
    }

    #[test]
    fn new_owner_takes_over_roles() {
        let mut c = coin();
        let out = c.transfer_ownership(addr("owner"), addr("next")).unwrap();
        assert_eq!(out.value, addr("owner"));
        assert_eq!(
            out.events,
            vec![CoinEvent::OwnershipTransferred {
                previous: addr("owner"),
                new: addr("next"),
            }]
        );
        assert_eq!(c.owner(), addr("next"));
        assert_eq!(c.reserve_authority(), addr("owner"));

        c.set_reserve_authority(addr("next"), addr("reserve")).unwrap();
        let err = c
            .set_reserve_authority(addr("owner"), addr("owner"))
            .unwrap_err();
        assert!(matches!(err, CoinError::Access(AccessError::NotOwner(_))));
        assert!(matches!(
            c.mint(addr("owner"), addr("user1"), 1, now()),
            Err(CoinError::NotAuthorized(_))
        ));
    }

    #[test]
    fn ownership_transfer_rejects_strangers_and_zero() {
        let mut c = coin();
        let err = c
            .transfer_ownership(addr("user1"), addr("user1"))
            .unwrap_err();
        assert!(matches!(err, CoinError::Access(AccessError::NotOwner(_))));
        assert_eq!(
            c.transfer_ownership(addr("owner"), Address::ZERO)
                .unwrap_err(),
            CoinError::Access(AccessError::ZeroOwner)
        );
        assert_eq!(c.owner(), addr("owner"));
    }

    #[test]
    fn human_views() {
        let mut c = funded("user1", 100);
        c.mint(addr("owner"), addr("user2"), 50, now()).unwrap();
        assert_eq!(c.total_supply_human(), 150);
        assert_eq!(c.balance_of_human(&addr("user1")), 100);
        assert_eq!(c.balance_of_human(&addr("user2")), 50);
    }

    #[test]
    fn transfer_moves_balance() {
        let mut c = funded("user1", 100);
        c.transfer(addr("user1"), addr("user2"), whole(30)).unwrap();
        assert_eq!(c.balance_of(&addr("user1")), whole(70));
        assert_eq!(c.balance_of(&addr("user2")), whole(30));
        assert_eq!(c.total_supply(), whole(100));
    }

    #[test]
    fn self_transfer_keeps_balance() {
        let mut c = funded("user1", 100);
        c.transfer(addr("user1"), addr("user1"), whole(40)).unwrap();
        assert_eq!(c.balance_of(&addr("user1")), whole(100));
    }

    #[test]
    fn transfer_from_with_allowance() {
        let mut c = funded("user1", 100);
        c.approve(addr("user1"), addr("user2"), whole(30)).unwrap();
        c.transfer_from(addr("user2"), addr("user1"), addr("user2"), whole(30))
            .unwrap();
        assert_eq!(c.balance_of(&addr("user2")), whole(30));
        assert_eq!(c.balance_of(&addr("user1")), whole(70));
    }

    #[test]
    fn transfer_from_over_allowance_fails() {
        let mut c = funded("user1", 100);
        c.approve(addr("user1"), addr("user2"), whole(10)).unwrap();
        let err = c
            .transfer_from(addr("user2"), addr("user1"), addr("user2"), whole(30))
            .unwrap_err();
        assert!(matches!(err, CoinError::InsufficientAllowance { .. }));
        assert_eq!(c.allowance(&addr("user1"), &addr("user2")), whole(10));
    }

    #[test]
    fn transfer_to_zero_fails() {
        let mut c = funded("user1", 100);
        assert!(matches!(
            c.transfer(addr("user1"), Address::ZERO, whole(1)),
            Err(CoinError::ZeroAddress(_))
        ));
    }
}
