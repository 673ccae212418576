//! Events emitted by HushhCoin.

use hushh_types::{Address, Timestamp, TokenAmount};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CoinEvent {
    /// Balance moved between holders. Mints come from and burns go to the zero address.
    Transfer {
        from: Address,
        to: Address,
        amount: TokenAmount,
    },
    /// A spender allowance was set.
    Approval {
        holder: Address,
        spender: Address,
        amount: TokenAmount,
    },
    TokensMinted {
        to: Address,
        amount: TokenAmount,
        timestamp: Timestamp,
    },
    TokensBurned {
        from: Address,
        amount: TokenAmount,
        timestamp: Timestamp,
    },
    ReserveAuthorityUpdated {
        previous: Address,
        new: Address,
    },
    OwnershipTransferred {
        previous: Address,
        new: Address,
    },
}
