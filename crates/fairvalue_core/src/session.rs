//! Valuation session: one model plus the override set being built against it
//!
//! The session is the only owner of mutable state. Every operation either reads
//! it (`valuate`, `sensitivity`, `review`, ...) or changes exactly one override
//! (`update`, `edit`).

use crate::analysis::{self, CategoryReview, MarketAssessment, SensitivityEntry};
use crate::config::{Scope, ValuationModel};
use crate::error::{Result, ValuationError};
use crate::evaluate;
use crate::model::{Assumption, AssumptionTable, Overrides, UpdateReport, Valuation};

/// First assumption in priority order without an override
pub fn next_unanswered<'t>(table: &'t AssumptionTable, overrides: &Overrides) -> Option<&'t Assumption> {
    table.iter().find(|a| !overrides.contains(a.id))
}

/// Count of answered assumptions out of the table size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.answered >= self.total
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    model: ValuationModel,
    overrides: Overrides,
}

impl Session {
    pub fn new(model: ValuationModel) -> Self {
        Self {
            model,
            overrides: Overrides::new(),
        }
    }

    /// Replace the override set with previously saved values.
    ///
    /// Ids missing from the table are skipped and returned so the caller can
    /// report them.
    pub fn restore<I>(&mut self, values: I) -> Vec<String>
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        self.overrides.clear();
        let mut rejected = Vec::new();
        for (id, value) in values {
            match self.model.table.get(&id) {
                Some(assumption) => {
                    self.overrides.insert(assumption.id, value);
                }
                None => rejected.push(id),
            }
        }
        rejected
    }

    /// Drop every override
    pub fn reset(&mut self) {
        self.overrides.clear();
    }

    pub fn model(&self) -> &ValuationModel {
        &self.model
    }

    pub fn table(&self) -> &AssumptionTable {
        &self.model.table
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    pub fn resolve(&self, id: &str) -> Result<f64> {
        evaluate::resolve(&self.model.table, &self.overrides, id)
    }

    pub fn valuate(&self) -> Result<Valuation> {
        evaluate::valuate(&self.model, &self.overrides)
    }

    /// Set one override and report the fair-value change
    pub fn update(&mut self, id: &str, value: f64) -> Result<UpdateReport> {
        evaluate::update(&self.model, &mut self.overrides, id, value)
    }

    /// Like [`update`](Self::update), honoring the model's edit scope
    pub fn edit(&mut self, id: &str, value: f64) -> Result<UpdateReport> {
        self.model.table.lookup(id)?;
        if self.model.edit_scope == Scope::Answered && !self.overrides.contains(id) {
            return Err(ValuationError::NotAnswered(id.to_string()));
        }
        self.update(id, value)
    }

    pub fn next_unanswered(&self) -> Option<&Assumption> {
        next_unanswered(&self.model.table, &self.overrides)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.overrides.len(),
            total: self.model.table.len(),
        }
    }

    /// Whether enough answers exist for the model to offer a sweep
    pub fn can_sweep(&self) -> bool {
        self.overrides.len() >= self.model.min_sweep_answers
    }

    pub fn sensitivity(&self) -> Result<Vec<SensitivityEntry>> {
        analysis::sensitivity(&self.model, &self.overrides)
    }

    /// Compare the current fair value against the model's market price
    pub fn assess(&self) -> Result<MarketAssessment> {
        let valuation = self.valuate()?;
        Ok(analysis::assess(
            valuation.fair_value_per_share,
            self.model.market_price,
            self.model.fair_band,
        ))
    }

    pub fn review(&self) -> Vec<CategoryReview> {
        analysis::review(&self.model.table, &self.overrides)
    }
}
