//! Assumptions and the ordered table that holds them
//!
//! An `AssumptionTable` is built once per model and never mutated. Its order is
//! the priority order used when asking questions, and it breaks ties in the
//! sensitivity ranking.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::{Result, ValuationError};

/// Display unit for an assumption or metric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Unit {
    /// Percentage points (15 means 15%)
    Percent,
    /// Billions of dollars
    Billions,
    /// Millions of dollars
    Millions,
    /// Valuation multiple
    Multiple,
    /// Basis points
    BasisPoints,
    /// Billions of shares
    BillionShares,
}

impl Unit {
    /// Short suffix shown after a raw value in prompts
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::Billions => "$B",
            Unit::Millions => "$M",
            Unit::Multiple => "x",
            Unit::BasisPoints => "bps",
            Unit::BillionShares => "B shares",
        }
    }

    /// Render a value in this unit, e.g. `15%`, `$0.5B`, `-300 bps`
    pub fn format(self, value: f64) -> String {
        match self {
            Unit::Percent => format!("{value}%"),
            Unit::Billions => dollars(value, "B"),
            Unit::Millions => dollars(value, "M"),
            Unit::Multiple => format!("{value}x"),
            Unit::BasisPoints => format!("{value} bps"),
            Unit::BillionShares => format!("{value}B shares"),
        }
    }
}

fn dollars(value: f64, scale: &str) -> String {
    if value < 0.0 {
        format!("-${}{scale}", -value)
    } else {
        format!("${value}{scale}")
    }
}

/// How an assumption is moved up and down during a sensitivity sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Perturbation {
    /// `v + v * f` and `v - v * f`, used for percentage-like assumptions
    Additive,
    /// `v * (1 + f)` and `v * (1 - f)`, used for absolute amounts and ratios
    Multiplicative,
}

impl Perturbation {
    /// Returns `(low, high)` for a perturbation of `fraction` around `current`
    pub fn bounds(self, current: f64, fraction: f64) -> (f64, f64) {
        match self {
            Perturbation::Additive => (current - current * fraction, current + current * fraction),
            Perturbation::Multiplicative => (current * (1.0 - fraction), current * (1.0 + fraction)),
        }
    }
}

/// A named numeric input to a valuation formula
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assumption {
    pub id: &'static str,
    pub default_value: f64,
    pub unit: Unit,
    /// Author-assigned importance, not derived from the sweep
    pub impact_weight: f64,
    pub perturbation: Perturbation,
    pub category: &'static str,
    pub prompt: &'static str,
    pub context: &'static str,
}

impl Assumption {
    /// Start an assumption with a multiplicative perturbation and no display text
    pub fn new(id: &'static str, default_value: f64, unit: Unit) -> Self {
        Self {
            id,
            default_value,
            unit,
            impact_weight: 0.0,
            perturbation: Perturbation::Multiplicative,
            category: "",
            prompt: "",
            context: "",
        }
    }

    #[must_use]
    pub fn weight(mut self, impact_weight: f64) -> Self {
        self.impact_weight = impact_weight;
        self
    }

    #[must_use]
    pub fn additive(mut self) -> Self {
        self.perturbation = Perturbation::Additive;
        self
    }

    #[must_use]
    pub fn category(mut self, category: &'static str) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn prompt(mut self, prompt: &'static str) -> Self {
        self.prompt = prompt;
        self
    }

    #[must_use]
    pub fn context(mut self, context: &'static str) -> Self {
        self.context = context;
        self
    }
}

/// Ordered, immutable set of assumptions with O(1) lookup by id
#[derive(Debug, Clone)]
pub struct AssumptionTable {
    assumptions: Vec<Assumption>,
    index: FxHashMap<&'static str, usize>,
}

impl AssumptionTable {
    pub fn new(assumptions: Vec<Assumption>) -> Self {
        let index: FxHashMap<&'static str, usize> = assumptions
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id, i))
            .collect();
        debug_assert_eq!(
            index.len(),
            assumptions.len(),
            "assumption ids must be unique"
        );
        Self { assumptions, index }
    }

    pub fn get(&self, id: &str) -> Option<&Assumption> {
        self.index.get(id).map(|&i| &self.assumptions[i])
    }

    /// Like [`get`](Self::get) but fails with `UnknownAssumption`
    pub fn lookup(&self, id: &str) -> Result<&Assumption> {
        self.get(id)
            .ok_or_else(|| ValuationError::UnknownAssumption(id.to_string()))
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// 1-based lookup used by numbered menus
    pub fn nth(&self, number: usize) -> Option<&Assumption> {
        number.checked_sub(1).and_then(|i| self.assumptions.get(i))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assumption> {
        self.assumptions.iter()
    }

    pub fn len(&self) -> usize {
        self.assumptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assumptions.is_empty()
    }
}

impl<'a> IntoIterator for &'a AssumptionTable {
    type Item = &'a Assumption;
    type IntoIter = std::slice::Iter<'a, Assumption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
