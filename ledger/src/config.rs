//! Harness configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use hushh_types::{Address, Timestamp};
use hushh_utils::LogFormat;

use crate::LedgerError;

/// Configuration for a ledger deployment.
///
/// Can be loaded from a TOML file via [`LedgerConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Account that deploys, and therefore owns, all three contracts.
    #[serde(default = "default_deployer")]
    pub deployer: Address,

    /// Floor for transaction timestamps, in Unix seconds. The clock is never
    /// allowed to stamp a transaction earlier than this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genesis_time: Option<u64>,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_deployer() -> Address {
    Address::derive("owner")
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl LedgerConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| LedgerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, LedgerError> {
        toml::from_str(s).map_err(|e| LedgerError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, LedgerError> {
        toml::to_string_pretty(self).map_err(|e| LedgerError::Config(e.to_string()))
    }

    pub fn genesis_timestamp(&self) -> Timestamp {
        Timestamp::new(self.genesis_time.unwrap_or(0))
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            deployer: default_deployer(),
            genesis_time: None,
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
