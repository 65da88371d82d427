//! Valuation model configuration
//!
//! A [`ValuationModel`] pairs an assumption table with the single formula that
//! combines it, plus the few policies that differ between variants. The two
//! presets live in their own modules and share the whole engine.

mod consensus;
mod interview;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::evaluate::Inputs;
use crate::model::{AssumptionTable, Valuation};

/// Market price the presets compare against, in $/share
pub const DEFAULT_MARKET_PRICE: f64 = 75.0;

/// A formula maps resolved inputs to a valuation
pub type Formula = fn(&Inputs<'_>) -> Result<Valuation>;

/// Which preset a model was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Override Wall Street consensus estimates one at a time
    #[default]
    Consensus,
    /// Answer insider-style questions about the current quarter
    Interview,
}

impl ModelKind {
    pub const ALL: [ModelKind; 2] = [ModelKind::Consensus, ModelKind::Interview];

    pub fn as_str(self) -> &'static str {
        match self {
            ModelKind::Consensus => "consensus",
            ModelKind::Interview => "interview",
        }
    }

    /// Build the preset for this kind
    pub fn model(self) -> ValuationModel {
        match self {
            ModelKind::Consensus => ValuationModel::consensus(),
            ModelKind::Interview => ValuationModel::interview(),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "consensus" => Ok(ModelKind::Consensus),
            "interview" | "ceo" => Ok(ModelKind::Interview),
            other => Err(format!("unknown model {other:?}")),
        }
    }
}

/// Which assumptions an operation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    /// Every assumption in the table
    All,
    /// Only assumptions that currently have an override
    Answered,
}

/// An assumption table, its formula, and the policies around them
#[derive(Debug, Clone)]
pub struct ValuationModel {
    pub kind: ModelKind,
    pub title: &'static str,
    pub table: AssumptionTable,
    pub formula: Formula,
    /// Price the fair value is compared against
    pub market_price: f64,
    /// A fair value within this many dollars of the market price counts as fairly valued
    pub fair_band: f64,
    pub sweep_scope: Scope,
    pub edit_scope: Scope,
    /// Answers required before a sweep is offered
    pub min_sweep_answers: usize,
    /// Rows of the ranked sweep worth showing
    pub sweep_display_limit: usize,
}

impl ValuationModel {
    /// Wall Street consensus with single-assumption overrides
    pub fn consensus() -> Self {
        Self {
            kind: ModelKind::Consensus,
            title: "Consensus Override",
            table: consensus::table(),
            formula: consensus::formula,
            market_price: DEFAULT_MARKET_PRICE,
            fair_band: 0.0,
            sweep_scope: Scope::All,
            edit_scope: Scope::All,
            min_sweep_answers: 0,
            sweep_display_limit: 5,
        }
    }

    /// CEO interview: insider questions about current operations
    pub fn interview() -> Self {
        Self {
            kind: ModelKind::Interview,
            title: "CEO Interview",
            table: interview::table(),
            formula: interview::formula,
            market_price: DEFAULT_MARKET_PRICE,
            fair_band: 10.0,
            sweep_scope: Scope::Answered,
            edit_scope: Scope::Answered,
            min_sweep_answers: 3,
            sweep_display_limit: 8,
        }
    }

    #[must_use]
    pub fn with_market_price(mut self, market_price: f64) -> Self {
        self.market_price = market_price;
        self
    }

    /// File name the session state is persisted under
    pub fn state_file(&self) -> String {
        format!("{}.json", self.kind)
    }
}
