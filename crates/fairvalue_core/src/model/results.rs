//! Derived outputs of the valuation engine
//!
//! Nothing here has identity of its own: every value is recomputed from the
//! current assumption values whenever it is asked for.

use serde::Serialize;

use super::Unit;

/// |delta| above which a change is reported as huge, in $/share
pub const HUGE_IMPACT: f64 = 10.0;
/// |delta| above which a change is reported as high, in $/share
pub const HIGH_IMPACT: f64 = 5.0;

/// An intermediate figure produced while computing the fair value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub key: &'static str,
    pub label: &'static str,
    pub value: f64,
    pub unit: Unit,
}

impl Metric {
    pub fn new(key: &'static str, label: &'static str, value: f64, unit: Unit) -> Self {
        Self {
            key,
            label,
            value,
            unit,
        }
    }
}

/// Result of one formula evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Valuation {
    /// Rounded to cents
    pub fair_value_per_share: f64,
    pub metrics: Vec<Metric>,
}

impl Valuation {
    /// Look up an intermediate metric by key
    pub fn metric(&self, key: &str) -> Option<f64> {
        self.metrics.iter().find(|m| m.key == key).map(|m| m.value)
    }
}

/// Before/after comparison for a single override
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateReport {
    pub id: &'static str,
    /// Override in effect before the update, if any
    pub previous: Option<f64>,
    pub value: f64,
    pub old_fair_value: f64,
    pub new_fair_value: f64,
    /// `new - old`, rounded to cents
    pub delta: f64,
    /// Percentage change rounded to one decimal; `None` when the old value is zero
    pub delta_pct: Option<f64>,
}

impl UpdateReport {
    pub fn impact_level(&self) -> ImpactLevel {
        ImpactLevel::classify(self.delta)
    }

    /// Factor by which a position marked at the old fair value moves
    pub fn position_multiple(&self) -> Option<f64> {
        (self.old_fair_value != 0.0).then(|| self.new_fair_value / self.old_fair_value)
    }
}

/// Coarse size of a fair-value change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImpactLevel {
    Normal,
    High,
    Huge,
}

impl ImpactLevel {
    pub fn classify(delta: f64) -> Self {
        let size = delta.abs();
        if size > HUGE_IMPACT {
            ImpactLevel::Huge
        } else if size > HIGH_IMPACT {
            ImpactLevel::High
        } else {
            ImpactLevel::Normal
        }
    }
}
