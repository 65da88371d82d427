use std::collections::BTreeMap;

use serde::Serialize;

/// User-supplied values replacing assumption defaults.
///
/// Only ids validated against an `AssumptionTable` are ever inserted; the
/// mutating methods are crate-private so every public path goes through
/// the table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Overrides {
    values: BTreeMap<String, f64>,
}

impl Overrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.values.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Owned copy of the raw mapping, for persistence
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.values.clone()
    }

    /// Returns the previous value
    pub(crate) fn insert(&mut self, id: &str, value: f64) -> Option<f64> {
        self.values.insert(id.to_string(), value)
    }

    pub(crate) fn remove(&mut self, id: &str) -> Option<f64> {
        self.values.remove(id)
    }

    pub(crate) fn clear(&mut self) {
        self.values.clear();
    }
}
