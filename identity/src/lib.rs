//! HushhIdentity is a soulbound identity token.
//!
//! Each wallet may mint exactly one identity for itself. Identities carry a
//! brand value score in `[0, 1000]` that only the contract owner can set, and
//! they can never be transferred or approved.

pub mod error;
pub mod registry;

pub use error::IdentityError;
pub use registry::{HushhIdentity, IdentityEvent, IdentityRecord, TokenId};
