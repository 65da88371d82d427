//! Saved session snapshot

use std::collections::BTreeMap;

use fairvalue_core::Session;
use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

/// What `<model>.json` holds between runs.
///
/// Older files name the override map `user_estimates` or `answers`; both load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    pub timestamp: DateTime,
    #[serde(alias = "user_estimates", alias = "answers")]
    pub overrides: BTreeMap<String, f64>,
    /// Fair value at save time, for display only
    pub fair_value: f64,
}

impl SavedState {
    /// Snapshot a session at `timestamp`
    pub fn capture(session: &Session, timestamp: DateTime) -> fairvalue_core::error::Result<Self> {
        Ok(Self {
            timestamp,
            overrides: session.overrides().to_map(),
            fair_value: session.valuate()?.fair_value_per_share,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
