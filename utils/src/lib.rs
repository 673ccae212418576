//! Shared utilities for the Hushh contract harness.

pub mod logging;

pub use logging::{init_logging, LogFormat, LoggingError};
