//! One-at-a-time sensitivity sweep
//!
//! Each assumption in scope is moved down and up by [`SWEEP_FRACTION`] using
//! its declared [`Perturbation`](crate::model::Perturbation), the formula is
//! re-run at both ends, and assumptions are ranked by the spread of the two
//! fair values.

use serde::Serialize;

use crate::config::{Scope, ValuationModel};
use crate::error::Result;
use crate::evaluate::{resolve, valuate};
use crate::model::Overrides;

/// Relative size of the probe in each direction
pub const SWEEP_FRACTION: f64 = 0.2;

/// How much one assumption moves the fair value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityEntry {
    pub id: &'static str,
    /// Value the probe is centered on
    pub current: f64,
    pub low_value: f64,
    pub high_value: f64,
    /// Fair value with the assumption at `low_value`
    pub low: f64,
    /// Fair value with the assumption at `high_value`
    pub high: f64,
    /// `|high - low|`
    pub impact: f64,
}

/// Rank the assumptions in the model's sweep scope by impact, highest first.
///
/// Ties keep table order. `overrides` is never modified; the probes run on
/// a scratch copy.
pub fn sensitivity(model: &ValuationModel, overrides: &Overrides) -> Result<Vec<SensitivityEntry>> {
    let mut scratch = overrides.clone();
    let mut entries = Vec::with_capacity(model.table.len());

    for assumption in &model.table {
        if model.sweep_scope == Scope::Answered && !overrides.contains(assumption.id) {
            continue;
        }

        let current = resolve(&model.table, overrides, assumption.id)?;
        let (low_value, high_value) = assumption.perturbation.bounds(current, SWEEP_FRACTION);

        scratch.insert(assumption.id, high_value);
        let high = valuate(model, &scratch)?.fair_value_per_share;
        scratch.insert(assumption.id, low_value);
        let low = valuate(model, &scratch)?.fair_value_per_share;

        match overrides.get(assumption.id) {
            Some(original) => scratch.insert(assumption.id, original),
            None => scratch.remove(assumption.id),
        };

        entries.push(SensitivityEntry {
            id: assumption.id,
            current,
            low_value,
            high_value,
            low,
            high,
            impact: (high - low).abs(),
        });
    }

    // sort_by is stable, which keeps table order among equal impacts
    entries.sort_by(|a, b| b.impact.total_cmp(&a.impact));

    tracing::debug!(
        model = %model.kind,
        probes = entries.len(),
        top = entries.first().map(|e| e.id),
        "sensitivity sweep complete"
    );

    Ok(entries)
}
