//! Token amount type for HushhCoin.
//!
//! Amounts are fixed-point integers (u128) in raw units to avoid floating-point errors.
//! One whole token is `10^DECIMALS` raw units.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TypeError;

/// A HushhCoin amount in raw units.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TokenAmount(u128);

impl TokenAmount {
    pub const ZERO: Self = Self(0);

    /// Number of decimal places of one whole token.
    pub const DECIMALS: u8 = 18;

    /// Raw units per whole token.
    pub const UNIT: u128 = 1_000_000_000_000_000_000;

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Scale a whole-token count up to raw units.
    pub fn from_whole(whole: u128) -> Result<Self, TypeError> {
        whole
            .checked_mul(Self::UNIT)
            .map(Self)
            .ok_or_else(|| TypeError::AmountOverflow(format!("{whole} whole tokens")))
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    /// Whole tokens, rounding down.
    pub fn whole(&self) -> u128 {
        self.0 / Self::UNIT
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frac = self.0 % Self::UNIT;
        if frac == 0 {
            write!(f, "{} HUSHH", self.whole())
        } else {
            let digits = format!("{frac:018}");
            write!(f, "{}.{} HUSHH", self.whole(), digits.trim_end_matches('0'))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_whole_scales_by_unit() {
        let amount = TokenAmount::from_whole(100).unwrap();
        assert_eq!(amount.raw(), 100 * TokenAmount::UNIT);
        assert_eq!(amount.whole(), 100);
    }

    #[test]
    fn from_whole_overflow() {
        assert!(TokenAmount::from_whole(u128::MAX).is_err());
    }

    #[test]
    fn whole_rounds_down() {
        let amount = TokenAmount::new(TokenAmount::UNIT * 3 / 2);
        assert_eq!(amount.whole(), 1);
    }

    #[test]
    fn display_trims_fraction() {
        assert_eq!(TokenAmount::from_whole(7).unwrap().to_string(), "7 HUSHH");
        assert_eq!(
            TokenAmount::new(TokenAmount::UNIT / 2).to_string(),
            "0.5 HUSHH"
        );
    }

    #[test]
    fn checked_arithmetic() {
        let a = TokenAmount::new(5);
        let b = TokenAmount::new(7);
        assert_eq!(a.checked_sub(b), None);
        assert_eq!(b.checked_sub(a), Some(TokenAmount::new(2)));
        assert_eq!(TokenAmount::new(u128::MAX).checked_add(a), None);
    }
}
