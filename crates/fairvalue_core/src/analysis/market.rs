use serde::Serialize;

/// Where the market price sits relative to the computed fair value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Undervalued,
    Overvalued,
    FairlyValued,
}

/// Comparison of a fair value against the market price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketAssessment {
    pub market_price: f64,
    pub fair_value: f64,
    /// `fair_value - market_price`
    pub diff: f64,
    /// `diff` as a percentage of the market price
    pub diff_pct: f64,
    pub verdict: Verdict,
}

impl MarketAssessment {
    /// Factor a position bought at the market price would be worth at fair value
    pub fn position_multiple(&self) -> f64 {
        1.0 + self.diff_pct / 100.0
    }
}

/// Compare `fair_value` with `market_price`.
///
/// Differences within `band` dollars (inclusive) count as fairly valued.
pub fn assess(fair_value: f64, market_price: f64, band: f64) -> MarketAssessment {
    let diff = fair_value - market_price;
    let diff_pct = if market_price != 0.0 {
        diff / market_price * 100.0
    } else {
        0.0
    };
    let verdict = if diff > band {
        Verdict::Undervalued
    } else if diff < -band {
        Verdict::Overvalued
    } else {
        Verdict::FairlyValued
    };

    MarketAssessment {
        market_price,
        fair_value,
        diff,
        diff_pct,
        verdict,
    }
}
