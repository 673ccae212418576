//! Transaction host for the Hushh contracts.
//!
//! The [`Ledger`] deploys HushhCoin, HushhIdentity and the proof registry,
//! then applies caller-attributed [`Transaction`]s to them one at a time.
//! `apply` takes `&mut self`: the borrow is the transaction boundary, so no
//! two calls ever interleave and a rejected call leaves every contract as it
//! was. Each accepted call gets a sequence number, a non-decreasing timestamp
//! and a [`Receipt`] carrying its events, which are also fanned out to
//! [`EventBus`] subscribers.

pub mod call;
pub mod config;
pub mod error;
pub mod event;
pub mod host;

pub use call::{Call, CallOutput, Contract, Transaction};
pub use config::LedgerConfig;
pub use error::LedgerError;
pub use event::{EventBus, LedgerEvent};
pub use host::{Deployment, Ledger, Receipt};
