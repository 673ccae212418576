//! Score-band proof registry (the `ZKMockProof` contract).
//!
//! A prover submits a score in `[0, 1000]`; the registry classifies it into one
//! of ten fixed bands, stores a proof record whose statement names the band,
//! and hands back the next sequential proof id. Anyone can later mark a proof
//! verified.
//!
//! This is a mock: the statement is a label, not a zero-knowledge proof, and no
//! proving scheme is implied.

pub mod band;
pub mod error;
pub mod record;
pub mod registry;

pub use band::{classify, ScoreBand, BANDS};
pub use error::ProofError;
pub use record::{GeneratedProof, ProofEvent, ProofId, ProofRecord};
pub use registry::ProofRegistry;
