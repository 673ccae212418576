//! Proof registry: issuance, per-prover index, verification and queries.

use std::collections::HashMap;

use hushh_types::{Address, Outcome, Ownership, Timestamp};
use serde::{Deserialize, Serialize};

use crate::band::{classify, ScoreBand};
use crate::error::ProofError;
use crate::record::{GeneratedProof, ProofEvent, ProofId, ProofRecord};

/// State of the proof registry contract.
///
/// Invariants:
/// - `proofs[i].id == i + 1`, so ids are dense and the next id is `len + 1`.
/// - every id under `user_proofs[a]` names a record whose `prover == a`, and
///   appears there exactly once, in issuance order.
/// - a failed call leaves every field untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProofRegistry {
    ownership: Ownership,
    proofs: Vec<ProofRecord>,
    user_proofs: HashMap<Address, Vec<ProofId>>,
}

impl ProofRegistry {
    /// Deploy an empty registry owned by `owner`.
    ///
    /// The owner has no privileges over proofs; the only owner-gated call is
    /// handing the registry to a new owner.
    pub fn new(owner: Address) -> Self {
        Self {
            ownership: Ownership::new(owner),
            proofs: Vec::new(),
            user_proofs: HashMap::new(),
        }
    }

    pub fn owner(&self) -> Address {
        self.ownership.owner()
    }

    /// Hand the registry to `new_owner`. Owner only. Returns the previous owner.
    pub fn transfer_ownership(
        &mut self,
        caller: Address,
        new_owner: Address,
    ) -> Result<Outcome<Address, ProofEvent>, ProofError> {
        let previous = self.ownership.transfer(&caller, new_owner)?;
        tracing::info!(%previous, new = %new_owner, "proof registry ownership transferred");

        Ok(Outcome::with_event(
            previous,
            ProofEvent::OwnershipTransferred {
                previous,
                new: new_owner,
            },
        ))
    }

    /// Generate a proof for `score` on behalf of `prover`.
    pub fn generate_proof(
        &mut self,
        prover: Address,
        score: u64,
        now: Timestamp,
    ) -> Result<Outcome<GeneratedProof, ProofEvent>, ProofError> {
        let band = classify(score)?;
        Ok(self.issue(prover, band, now))
    }

    /// Generate one proof per score, in input order, all or nothing.
    ///
    /// Every score is classified before the first id is allocated, so a single
    /// out-of-range score rejects the whole batch with the counter untouched.
    pub fn batch_generate_proofs(
        &mut self,
        prover: Address,
        scores: &[u64],
        now: Timestamp,
    ) -> Result<Outcome<Vec<ProofId>, ProofEvent>, ProofError> {
        let bands = scores
            .iter()
            .map(|&score| classify(score))
            .collect::<Result<Vec<_>, _>>()?;

        let mut ids = Vec::with_capacity(bands.len());
        let mut events = Vec::with_capacity(bands.len());
        for band in bands {
            let issued = self.issue(prover, band, now);
            ids.push(issued.value.id);
            events.extend(issued.events);
        }
        Ok(Outcome::new(ids, events))
    }

    fn issue(
        &mut self,
        prover: Address,
        band: &ScoreBand,
        now: Timestamp,
    ) -> Outcome<GeneratedProof, ProofEvent> {
        let id = self.proofs.len() as ProofId + 1;
        let statement = band.statement();

        self.proofs.push(ProofRecord {
            id,
            prover,
            statement: statement.clone(),
            verified: false,
            created_at: now,
        });
        self.user_proofs.entry(prover).or_default().push(id);

        tracing::debug!(%prover, id, band = band.label, "proof generated");

        Outcome::with_event(
            GeneratedProof {
                id,
                statement: statement.clone(),
            },
            ProofEvent::ProofGenerated {
                prover,
                id,
                statement,
                timestamp: now,
            },
        )
    }

    /// Mark a proof verified. Open to any caller and idempotent.
    pub fn verify_proof(
        &mut self,
        verifier: Address,
        id: ProofId,
        now: Timestamp,
    ) -> Result<Outcome<bool, ProofEvent>, ProofError> {
        let record = self.record_mut(id)?;
        let first = !record.verified;
        record.verified = true;

        tracing::debug!(%verifier, id, first, "proof verified");

        Ok(Outcome::with_event(
            true,
            ProofEvent::ProofVerified {
                verifier,
                id,
                timestamp: now,
            },
        ))
    }

    pub fn get_proof(&self, id: ProofId) -> Result<&ProofRecord, ProofError> {
        id.checked_sub(1)
            .and_then(|idx| usize::try_from(idx).ok())
            .and_then(|idx| self.proofs.get(idx))
            .ok_or(ProofError::NotFound(id))
    }

    fn record_mut(&mut self, id: ProofId) -> Result<&mut ProofRecord, ProofError> {
        id.checked_sub(1)
            .and_then(|idx| usize::try_from(idx).ok())
            .and_then(|idx| self.proofs.get_mut(idx))
            .ok_or(ProofError::NotFound(id))
    }

    /// Ids generated by `prover`, oldest first. Empty for unknown provers.
    pub fn get_user_proofs(&self, prover: &Address) -> &[ProofId] {
        self.user_proofs
            .get(prover)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of proofs issued, equal to the last allocated id.
    pub fn total_proofs(&self) -> u64 {
        self.proofs.len() as u64
    }

    /// All records in id order.
    pub fn proofs(&self) -> &[ProofRecord] {
        &self.proofs
    }
}
