//! Contract events as seen by ledger subscribers.

use hushh_coin::CoinEvent;
use hushh_identity::IdentityEvent;
use hushh_proofs::ProofEvent;
use serde::{Deserialize, Serialize};

/// An event emitted by one of the hosted contracts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "contract", rename_all = "snake_case")]
pub enum LedgerEvent {
    Coin(CoinEvent),
    Identity(IdentityEvent),
    Proof(ProofEvent),
}

impl From<CoinEvent> for LedgerEvent {
    fn from(e: CoinEvent) -> Self {
        Self::Coin(e)
    }
}

impl From<IdentityEvent> for LedgerEvent {
    fn from(e: IdentityEvent) -> Self {
        Self::Identity(e)
    }
}

impl From<ProofEvent> for LedgerEvent {
    fn from(e: ProofEvent) -> Self {
        Self::Proof(e)
    }
}

/// Synchronous fan-out event bus for ledger events.
///
/// Delivery is fire-and-forget: listeners are invoked inline after a
/// transaction commits and cannot reject it. Keep handlers fast.
pub struct EventBus {
    listeners: Vec<Box<dyn Fn(&LedgerEvent) + Send + Sync>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&LedgerEvent) + Send + Sync>) {
        self.listeners.push(listener);
    }

    pub fn emit(&self, event: &LedgerEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
