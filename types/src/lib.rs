//! Fundamental types for the Hushh contracts.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! account addresses, timestamps and clocks, token amounts, bounded scores,
//! the ownership capability check used to gate privileged calls, and the
//! `Outcome` wrapper that carries emitted events back to the host.

pub mod access;
pub mod address;
pub mod amount;
pub mod error;
pub mod outcome;
pub mod score;
pub mod time;

pub use access::Ownership;
pub use address::Address;
pub use amount::TokenAmount;
pub use error::{AccessError, ScoreError, TypeError};
pub use outcome::Outcome;
pub use score::Score;
pub use time::{Clock, SystemClock, Timestamp};
