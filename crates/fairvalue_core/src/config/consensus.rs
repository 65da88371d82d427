//! Consensus preset: a three-year EBITDA-multiple projection
//!
//! Starts from Wall Street consensus and lets the user override one estimate
//! at a time.

use crate::error::Result;
use crate::evaluate::{Inputs, round_to};
use crate::model::{Assumption, AssumptionTable, Metric, Unit, Valuation};

/// 2024 revenue, $B
const CURRENT_REVENUE: f64 = 40.0;
/// Advertising revenue already inside the current base, $B
const CURRENT_AD_REVENUE: f64 = 1.1;
/// Billions
const SHARES_OUTSTANDING: f64 = 2.1;
/// $B
const NET_DEBT: f64 = 5.0;
const PROJECTION_YEARS: f64 = 3.0;

pub(super) fn table() -> AssumptionTable {
    AssumptionTable::new(vec![
        Assumption::new("ebitda_margin_2027", 15.0, Unit::Percent)
            .weight(3.2)
            .additive()
            .category("Profitability")
            .prompt("What will Uber's adjusted EBITDA margin be in 2027?")
            .context("Wall Street consensus: 15%. Current (2024): ~10%."),
        Assumption::new("regulatory_cost_annual", 0.5, Unit::Billions)
            .weight(15.0)
            .category("Regulatory & Risk")
            .prompt("What will Uber's total annual regulatory cost be (steady state)?")
            .context("Includes CA AB5, the UK settlement and EU cases. Wall Street: $500M/year."),
        Assumption::new("delivery_take_rate_2027", 23.0, Unit::Percent)
            .weight(2.8)
            .category("Unit Economics")
            .prompt("What will the Uber Eats delivery take rate be in 2027?")
            .context("Current: 21%. Wall Street expects 23%. Can it go higher?"),
        Assumption::new("revenue_growth_2025_2027", 12.0, Unit::Percent)
            .weight(1.8)
            .additive()
            .category("Revenue & Growth")
            .prompt("What will Uber's revenue growth rate be (2025-2027 CAGR)?")
            .context("Wall Street: 12%. Historical: 15%+. Depends on market share."),
        Assumption::new("advertising_revenue_2027", 2.5, Unit::Billions)
            .weight(5.0)
            .category("Advertising & New Revenue")
            .prompt("What will Uber's advertising revenue be in 2027?")
            .context("2024: ~$1.1B. Wall Street: $2.5B. Could be $3-5B if it scales."),
        Assumption::new("ebitda_multiple", 15.0, Unit::Multiple)
            .weight(4.2)
            .category("Valuation")
            .prompt("What EBITDA multiple should Uber trade at?")
            .context("Tech companies: 18-25x. Transport: 8-12x. Wall Street: 15x."),
        Assumption::new("mobility_take_rate_2027", 25.0, Unit::Percent)
            .weight(2.1)
            .category("Unit Economics")
            .prompt("What will the Mobility (rides) take rate be in 2027?")
            .context("Current: 24%. Wall Street: 25%. Maxed out or room to grow?"),
        Assumption::new("stock_based_comp_pct", 8.0, Unit::Percent)
            .weight(-1.5)
            .additive()
            .category("Profitability")
            .prompt("What % of revenue will stock-based compensation be in 2027?")
            .context("Current: ~9%. Wall Street expects 8% (declining). Could stay high."),
    ])
}

pub(super) fn formula(inputs: &Inputs<'_>) -> Result<Valuation> {
    let growth = inputs.value("revenue_growth_2025_2027")? / 100.0;
    let mut revenue = CURRENT_REVENUE * (1.0 + growth).powf(PROJECTION_YEARS);
    revenue += inputs.value("advertising_revenue_2027")? - CURRENT_AD_REVENUE;

    let ebitda = revenue * (inputs.value("ebitda_margin_2027")? / 100.0);
    let adjusted = ebitda - inputs.value("regulatory_cost_annual")?;

    // SBC is a real cost even though adjusted EBITDA excludes it
    let sbc = revenue * (inputs.value("stock_based_comp_pct")? / 100.0);
    let true_ebitda = adjusted - sbc;

    let enterprise_value = true_ebitda * inputs.value("ebitda_multiple")?;
    let equity_value = enterprise_value - NET_DEBT;
    let fair_value = equity_value / SHARES_OUTSTANDING;

    Ok(Valuation {
        fair_value_per_share: round_to(fair_value, 2),
        metrics: vec![
            Metric::new("revenue_2027", "2027 Revenue", round_to(revenue, 2), Unit::Billions),
            Metric::new(
                "ebitda_2027",
                "2027 EBITDA (adjusted)",
                round_to(ebitda, 2),
                Unit::Billions,
            ),
            Metric::new(
                "true_ebitda_2027",
                "2027 True EBITDA (after SBC)",
                round_to(true_ebitda, 2),
                Unit::Billions,
            ),
            Metric::new(
                "enterprise_value",
                "Enterprise Value",
                round_to(enterprise_value, 2),
                Unit::Billions,
            ),
            Metric::new(
                "equity_value",
                "Equity Value",
                round_to(equity_value, 2),
                Unit::Billions,
            ),
        ],
    })
}
