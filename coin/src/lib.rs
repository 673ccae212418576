//! HushhCoin is the fungible token.
//!
//! An 18-decimal token whose supply is created by the owner or a designated
//! reserve authority. Mint amounts are given in whole tokens and scaled by
//! `10^18`; every other amount is raw units.

pub mod error;
pub mod event;
pub mod token;

pub use error::CoinError;
pub use event::CoinEvent;
pub use token::HushhCoin;
