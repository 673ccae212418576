//! The ledger host: deploys the contracts and applies transactions serially.

use hushh_coin::HushhCoin;
use hushh_identity::HushhIdentity;
use hushh_proofs::ProofRegistry;
use hushh_types::{Address, Clock, Outcome, Timestamp};
use serde::{Deserialize, Serialize};

use crate::call::{Call, CallOutput, Contract, Transaction};
use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::event::{EventBus, LedgerEvent};

/// Proof that a transaction was applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Position in the ledger's total order, starting at 1. Rejected
    /// transactions do not consume a sequence number.
    pub sequence: u64,
    pub caller: Address,
    pub timestamp: Timestamp,
    pub output: CallOutput,
    pub events: Vec<LedgerEvent>,
}

/// A deployed contract and its owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub contract: String,
    pub symbol: Option<String>,
    pub owner: Address,
}

/// Hosts the three contracts behind a single-writer transaction boundary.
pub struct Ledger {
    config: LedgerConfig,
    clock: Box<dyn Clock>,
    coin: HushhCoin,
    identity: HushhIdentity,
    proofs: ProofRegistry,
    bus: EventBus,
    sequence: u64,
    last_timestamp: Timestamp,
}

type CallResult = Result<Outcome<CallOutput, LedgerEvent>, LedgerError>;

impl Ledger {
    /// Deploy all contracts, owned by `config.deployer`.
    pub fn deploy(config: LedgerConfig, clock: Box<dyn Clock>) -> Self {
        let deployer = config.deployer;
        tracing::info!(%deployer, "deploying contracts");

        let ledger = Self {
            coin: HushhCoin::new(deployer),
            identity: HushhIdentity::new(deployer),
            proofs: ProofRegistry::new(deployer),
            bus: EventBus::new(),
            sequence: 0,
            last_timestamp: config.genesis_timestamp(),
            clock,
            config,
        };
        for d in ledger.deployments() {
            tracing::info!(contract = %d.contract, owner = %d.owner, "contract deployed");
        }
        ledger
    }

    pub fn deployments(&self) -> Vec<Deployment> {
        vec![
            Deployment {
                contract: Contract::Coin.name().to_string(),
                symbol: Some(HushhCoin::SYMBOL.to_string()),
                owner: self.coin.owner(),
            },
            Deployment {
                contract: Contract::Identity.name().to_string(),
                symbol: Some(HushhIdentity::SYMBOL.to_string()),
                owner: self.identity.owner(),
            },
            Deployment {
                contract: Contract::Proofs.name().to_string(),
                symbol: None,
                owner: self.proofs.owner(),
            },
        ]
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn coin(&self) -> &HushhCoin {
        &self.coin
    }

    pub fn identity(&self) -> &HushhIdentity {
        &self.identity
    }

    pub fn proofs(&self) -> &ProofRegistry {
        &self.proofs
    }

    /// Sequence number of the last applied transaction (0 before the first).
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn last_timestamp(&self) -> Timestamp {
        self.last_timestamp
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&LedgerEvent) + Send + Sync>) {
        self.bus.subscribe(listener);
    }

    /// Apply one transaction.
    ///
    /// On error nothing changes: contract state, sequence number and the
    /// timestamp floor are exactly as before the call.
    pub fn apply(&mut self, tx: Transaction) -> Result<Receipt, LedgerError> {
        let now = self.clock.now().max(self.last_timestamp);
        let contract = tx.call.contract().name();

        let outcome = match self.execute(tx.caller, tx.call, now) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(caller = %tx.caller, contract, error = %e, "transaction rejected");
                return Err(e);
            }
        };

        self.sequence += 1;
        self.last_timestamp = now;
        for event in &outcome.events {
            self.bus.emit(event);
        }
        tracing::debug!(
            sequence = self.sequence,
            caller = %tx.caller,
            contract,
            events = outcome.events.len(),
            "transaction applied"
        );

        Ok(Receipt {
            sequence: self.sequence,
            caller: tx.caller,
            timestamp: now,
            output: outcome.value,
            events: outcome.events,
        })
    }

    /// Apply transactions in order, continuing past failures.
    pub fn apply_all(
        &mut self,
        txs: impl IntoIterator<Item = Transaction>,
    ) -> Vec<Result<Receipt, LedgerError>> {
        txs.into_iter().map(|tx| self.apply(tx)).collect()
    }

    fn execute(&mut self, caller: Address, call: Call, now: Timestamp) -> CallResult {
        match call {
            Call::TransferOwnership {
                contract: Contract::Coin,
                new_owner,
            } => lift(
                self.coin.transfer_ownership(caller, new_owner),
                CallOutput::Account,
            ),
            Call::TransferOwnership {
                contract: Contract::Identity,
                new_owner,
            } => lift(
                self.identity.transfer_ownership(caller, new_owner),
                CallOutput::Account,
            ),
            Call::TransferOwnership {
                contract: Contract::Proofs,
                new_owner,
            } => lift(
                self.proofs.transfer_ownership(caller, new_owner),
                CallOutput::Account,
            ),

            Call::Mint { to, amount } => {
                lift(self.coin.mint(caller, to, amount, now), CallOutput::Amount)
            }
            Call::Burn { amount } => lift(self.coin.burn(caller, amount, now), |()| {
                CallOutput::Unit
            }),
            Call::BurnFrom { from, amount } => lift(
                self.coin.burn_from(caller, from, amount, now),
                |()| CallOutput::Unit,
            ),
            Call::Transfer { to, amount } => {
                lift(self.coin.transfer(caller, to, amount), CallOutput::Flag)
            }
            Call::Approve { spender, amount } => {
                lift(self.coin.approve(caller, spender, amount), CallOutput::Flag)
            }
            Call::TransferFrom { from, to, amount } => lift(
                self.coin.transfer_from(caller, from, to, amount),
                CallOutput::Flag,
            ),
            Call::SetReserveAuthority { authority } => lift(
                self.coin.set_reserve_authority(caller, authority),
                CallOutput::Account,
            ),

            Call::CreateIdentity => lift(
                self.identity.create_identity(caller, now),
                CallOutput::TokenId,
            ),
            Call::SetBrandValueScore { wallet, score } => lift(
                self.identity
                    .set_brand_value_score(caller, wallet, score, now),
                CallOutput::Score,
            ),
            Call::TransferIdentity { from, to, token_id } => {
                self.identity.transfer_from(caller, from, to, token_id)?;
                Ok(Outcome::new(CallOutput::Unit, Vec::new()))
            }
            Call::SafeTransferIdentity { from, to, token_id } => {
                self.identity
                    .safe_transfer_from(caller, from, to, token_id)?;
                Ok(Outcome::new(CallOutput::Unit, Vec::new()))
            }
            Call::ApproveIdentity { to, token_id } => {
                self.identity.approve(caller, to, token_id)?;
                Ok(Outcome::new(CallOutput::Unit, Vec::new()))
            }
            Call::SetIdentityApprovalForAll { operator, approved } => {
                self.identity
                    .set_approval_for_all(caller, operator, approved)?;
                Ok(Outcome::new(CallOutput::Unit, Vec::new()))
            }

            Call::GenerateProof { score } => lift(
                self.proofs.generate_proof(caller, score, now),
                CallOutput::Proof,
            ),
            Call::BatchGenerateProofs { scores } => lift(
                self.proofs.batch_generate_proofs(caller, &scores, now),
                CallOutput::ProofIds,
            ),
            Call::VerifyProof { id } => lift(
                self.proofs.verify_proof(caller, id, now),
                CallOutput::Flag,
            ),
        }
    }
}

/// Convert a contract outcome into the host's uniform shape.
fn lift<T, E, R>(
    result: Result<Outcome<T, E>, R>,
    output: impl FnOnce(T) -> CallOutput,
) -> CallResult
where
    LedgerEvent: From<E>,
    LedgerError: From<R>,
{
    result
        .map(|outcome| outcome.map(output).map_events(LedgerEvent::from))
        .map_err(LedgerError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hushh_nullables::NullClock;
    use hushh_proofs::ProofError;
    use std::rc::Rc;

    fn addr(s: &str) -> Address {
        Address::derive(s)
    }

    fn ledger_at(secs: u64) -> (Ledger, Rc<NullClock>) {
        let clock = Rc::new(NullClock::new(secs));
        let ledger = Ledger::deploy(LedgerConfig::default(), Box::new(Rc::clone(&clock)));
        (ledger, clock)
    }

    fn proof(caller: &str, score: u64) -> Transaction {
        Transaction::new(addr(caller), Call::GenerateProof { score })
    }

    #[test]
    fn deploy_sets_owner_everywhere() {
        let (ledger, _) = ledger_at(0);
        let deployments = ledger.deployments();
        assert_eq!(deployments.len(), 3);
        assert!(deployments.iter().all(|d| d.owner == addr("owner")));
        assert_eq!(ledger.sequence(), 0);
    }

    #[test]
    fn receipts_are_sequenced_and_stamped() {
        let (mut ledger, clock) = ledger_at(100);
        let r1 = ledger.apply(proof("user1", 950)).unwrap();
        clock.advance(5);
        let r2 = ledger.apply(proof("user2", 899)).unwrap();

        assert_eq!((r1.sequence, r2.sequence), (1, 2));
        assert_eq!(r1.timestamp, Timestamp::new(100));
        assert_eq!(r2.timestamp, Timestamp::new(105));
        match r1.output {
            CallOutput::Proof(p) => assert!(p.statement.contains("Excellent")),
            other => panic!("unexpected output {other:?}"),
        }
    }

    #[test]
    fn rejected_transaction_consumes_nothing() {
        let (mut ledger, _) = ledger_at(100);
        let err = ledger.apply(proof("user1", 1001)).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Proof(ProofError::OutOfRange { score: 1001 })
        ));
        assert_eq!(ledger.sequence(), 0);
        assert_eq!(ledger.proofs().total_proofs(), 0);

        let receipt = ledger.apply(proof("user1", 0)).unwrap();
        assert_eq!(receipt.sequence, 1);
        match receipt.output {
            CallOutput::Proof(p) => {
                assert_eq!(p.id, 1);
                assert!(p.statement.contains("Unrated"));
            }
            other => panic!("unexpected output {other:?}"),
        }
    }

    #[test]
    fn timestamps_never_go_backwards() {
        let (mut ledger, clock) = ledger_at(500);
        ledger.apply(proof("user1", 10)).unwrap();
        clock.set(400);
        let receipt = ledger.apply(proof("user1", 20)).unwrap();
        assert_eq!(receipt.timestamp, Timestamp::new(500));
        assert_eq!(
            ledger.proofs().get_proof(2).unwrap().created_at,
            Timestamp::new(500)
        );
    }

    #[test]
    fn genesis_time_is_a_floor() {
        let config = LedgerConfig {
            genesis_time: Some(1_000),
            ..LedgerConfig::default()
        };
        let mut ledger = Ledger::deploy(config, Box::new(NullClock::new(10)));
        let receipt = ledger.apply(proof("user1", 10)).unwrap();
        assert_eq!(receipt.timestamp, Timestamp::new(1_000));
    }

    #[test]
    fn events_reach_subscribers() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let (mut ledger, _) = ledger_at(0);
        let seen = Arc::new(AtomicUsize::new(0));
        let s = Arc::clone(&seen);
        ledger.subscribe(Box::new(move |event| {
            if matches!(event, LedgerEvent::Proof(_)) {
                s.fetch_add(1, Ordering::SeqCst);
            }
        }));

        ledger
            .apply(Transaction::new(
                addr("user1"),
                Call::BatchGenerateProofs {
                    scores: vec![700, 800],
                },
            ))
            .unwrap();
        ledger
            .apply(Transaction::new(addr("user2"), Call::VerifyProof { id: 1 }))
            .unwrap();
        let _ = ledger.apply(Transaction::new(addr("user2"), Call::VerifyProof { id: 9 }));

        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn apply_all_continues_past_failures() {
        let (mut ledger, _) = ledger_at(0);
        let results = ledger.apply_all(vec![
            proof("user1", 700),
            proof("user1", 5000),
            proof("user1", 800),
        ]);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().sequence, 2);
        assert_eq!(ledger.proofs().get_user_proofs(&addr("user1")), &[1, 2]);
    }
}
