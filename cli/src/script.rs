//! Transaction scripts: JSON arrays of `{ "caller": ..., "call": ... }`.
//!
//! Any account field may name a development account by label (`"owner"`,
//! `"user1"`) instead of a `0x` address; labels resolve through
//! [`Address::derive`].

use std::path::Path;

use anyhow::Context;
use hushh_ledger::Transaction;
use hushh_types::Address;
use serde_json::Value;

/// Object keys whose string values name accounts.
const ACCOUNT_KEYS: &[&str] = &[
    "caller",
    "to",
    "from",
    "spender",
    "authority",
    "wallet",
    "operator",
    "new_owner",
];

pub fn load(path: &Path) -> anyhow::Result<Vec<Transaction>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    parse(&text).with_context(|| format!("parsing script {}", path.display()))
}

pub fn parse(text: &str) -> anyhow::Result<Vec<Transaction>> {
    let mut value: Value = serde_json::from_str(text)?;
    resolve_accounts(&mut value);
    let steps = value
        .as_array()
        .context("script must be a JSON array of transactions")?;
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            serde_json::from_value(step.clone()).with_context(|| format!("transaction #{i}"))
        })
        .collect()
}

/// Replace account labels with derived addresses, in place.
fn resolve_accounts(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, v) in map.iter_mut() {
                match v {
                    Value::String(s) if ACCOUNT_KEYS.contains(&key.as_str()) => {
                        if !s.starts_with(Address::PREFIX) {
                            *s = Address::derive(s).to_string();
                        }
                    }
                    other => resolve_accounts(other),
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(resolve_accounts),
        _ => {}
    }
}
