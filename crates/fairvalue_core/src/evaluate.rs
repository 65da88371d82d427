//! Assumption resolution and formula evaluation
//!
//! Everything in this module is a pure function of an assumption table and an
//! override set, apart from [`update`] which records one override.

use crate::config::ValuationModel;
use crate::error::Result;
use crate::model::{AssumptionTable, Overrides, UpdateReport, Valuation};

/// Round to `places` decimals.
///
/// Works on the exact binary value with ties to even, so `1.25` rounds to
/// `1.2` and `2.675` (stored just below) to `2.67`.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// The override for `id` if present, else its default.
///
/// Fails with `UnknownAssumption` when `id` is not in `table`.
pub fn resolve(table: &AssumptionTable, overrides: &Overrides, id: &str) -> Result<f64> {
    let assumption = table.lookup(id)?;
    Ok(overrides.get(id).unwrap_or(assumption.default_value))
}

/// Resolved view of the assumptions handed to a formula
#[derive(Debug, Clone, Copy)]
pub struct Inputs<'a> {
    table: &'a AssumptionTable,
    overrides: &'a Overrides,
}

impl<'a> Inputs<'a> {
    pub fn new(table: &'a AssumptionTable, overrides: &'a Overrides) -> Self {
        Self { table, overrides }
    }

    /// Current value of `id` (override, else default)
    pub fn value(&self, id: &str) -> Result<f64> {
        resolve(self.table, self.overrides, id)
    }

    /// The override for `id`, or `None` when it still sits at its default
    pub fn answered(&self, id: &str) -> Result<Option<f64>> {
        self.table.lookup(id)?;
        Ok(self.overrides.get(id))
    }
}

/// Evaluate `model`'s formula against the current overrides
pub fn valuate(model: &ValuationModel, overrides: &Overrides) -> Result<Valuation> {
    (model.formula)(&Inputs::new(&model.table, overrides))
}

/// Record `value` for `id` and report how the fair value moved.
///
/// The override set is left untouched when `id` is unknown.
pub fn update(
    model: &ValuationModel,
    overrides: &mut Overrides,
    id: &str,
    value: f64,
) -> Result<UpdateReport> {
    let assumption = model.table.lookup(id)?;
    let old = valuate(model, overrides)?.fair_value_per_share;

    let previous = overrides.insert(assumption.id, value);
    let new = match valuate(model, overrides) {
        Ok(valuation) => valuation.fair_value_per_share,
        Err(err) => {
            match previous {
                Some(prev) => overrides.insert(assumption.id, prev),
                None => overrides.remove(assumption.id),
            };
            return Err(err);
        }
    };

    let raw_delta = new - old;
    let delta_pct = (old != 0.0).then(|| round_to(raw_delta / old * 100.0, 1));

    tracing::debug!(
        model = %model.kind,
        id = assumption.id,
        value,
        old,
        new,
        "override updated"
    );

    Ok(UpdateReport {
        id: assumption.id,
        previous,
        value,
        old_fair_value: old,
        new_fair_value: new,
        delta: round_to(raw_delta, 2),
        delta_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(22.846180952380953, 2), 22.85);
        assert_eq!(round_to(2.0728571428, 3), 2.073);
        assert_eq!(round_to(35.97374, 1), 36.0);
        assert_eq!(round_to(-1.005001, 2), -1.01);
    }

    #[test]
    fn test_round_to_ties_go_to_even() {
        assert_eq!(round_to(1.25, 1), 1.2);
        assert_eq!(round_to(1.35, 1), 1.4);
        assert_eq!(round_to(-1.25, 1), -1.2);
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(0.5, 0), 0.0);
    }
}
