//! Nullable infrastructure for deterministic testing.
//!
//! External inputs the contracts depend on (today only the clock) are
//! abstracted behind traits in `hushh-types`. This crate provides test-friendly
//! implementations that return deterministic values and can be steered
//! programmatically.

pub mod clock;

pub use clock::NullClock;
