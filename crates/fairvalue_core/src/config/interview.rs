//! Interview preset: roleplay as the CEO answering an analyst's questions
//!
//! The questions pin down beliefs about the current quarter; only a handful of
//! them feed the formula; the rest are recorded so the answers can be
//! reviewed and swept alongside the ones that do.

use crate::error::Result;
use crate::evaluate::{Inputs, round_to};
use crate::model::{Assumption, AssumptionTable, Metric, Unit, Valuation};

/// Billions
const SHARES_OUTSTANDING: f64 = 2.1;
/// $B
const NET_DEBT: f64 = 5.0;
/// Q3 2024 revenue, $B; used until the weekly run rate is answered
const LAST_QUARTER_REVENUE: f64 = 9.3;
/// Price buybacks are assumed to execute at, $/share
const BUYBACK_PRICE: f64 = 75.0;
const DAYS_PER_QUARTER: f64 = 365.0 / 4.0;
const MONTHS: f64 = 12.0;

pub(super) fn table() -> AssumptionTable {
    AssumptionTable::new(vec![
        // Revenue & Growth
        Assumption::new("revenue_last_week", 103.0 * 7.0, Unit::Millions)
            .weight(8.0)
            .category("Revenue & Growth")
            .prompt("What was Uber's total revenue last week?")
            .context("Last quarter: $9.3B over 90 days, ~$103M/day. The current run rate tells whether Q4 will beat or miss."),
        Assumption::new("mobility_gmv_growth_mom", 2.0, Unit::Percent)
            .weight(7.0)
            .category("Revenue & Growth")
            .prompt("What is Mobility GMV growth month-over-month right now?")
            .context("Are rides accelerating or decelerating vs last month?"),
        Assumption::new("delivery_gmv_growth_mom", 1.5, Unit::Percent)
            .weight(7.0)
            .category("Revenue & Growth")
            .prompt("What is Delivery GMV growth month-over-month right now?")
            .context("Is Uber Eats growing faster or slower than last month?"),
        // Unit Economics
        Assumption::new("mobility_take_rate_current", 24.0, Unit::Percent)
            .weight(9.0)
            .category("Unit Economics")
            .prompt("What is the actual Mobility take rate this week, after driver incentives?")
            .context("Filings show ~24%. What is the true rate after all promotions?"),
        Assumption::new("delivery_take_rate_current", 23.0, Unit::Percent)
            .weight(9.0)
            .category("Unit Economics")
            .prompt("What is the actual Delivery take rate this week, after restaurant incentives?")
            .context("Filings show ~23%. What is the true rate after all promotions?"),
        Assumption::new("contribution_margin_mobility", 65.0, Unit::Percent)
            .weight(8.0)
            .category("Unit Economics")
            .prompt("What is the contribution margin on Mobility rides right now?")
            .context("Revenue minus direct variable costs per ride, after insurance and support."),
        Assumption::new("contribution_margin_delivery", 55.0, Unit::Percent)
            .weight(8.0)
            .category("Unit Economics")
            .prompt("What is the contribution margin on Delivery orders right now?")
            .context("Revenue minus direct variable costs per order, after support and fraud."),
        // Market Position
        Assumption::new("us_rideshare_market_share", 74.0, Unit::Percent)
            .weight(6.0)
            .category("Market Position")
            .prompt("What is Uber's actual US rideshare market share right now?")
            .context("Versus Lyft. What share of all ride-hailing trips are Uber?"),
        Assumption::new("us_delivery_market_share", 25.0, Unit::Percent)
            .weight(6.0)
            .category("Market Position")
            .prompt("What is Uber Eats' actual share of US food delivery right now?")
            .context("Versus DoorDash and Grubhub. What share of all delivery orders?"),
        Assumption::new("doordash_pricing_vs_uber", -5.0, Unit::Percent)
            .weight(5.0)
            .category("Market Position")
            .prompt("How much cheaper or pricier is DoorDash than Uber Eats on average?")
            .context("Same restaurant, same order. Positive means DoorDash is more expensive."),
        // Profitability
        Assumption::new("stock_based_comp_run_rate", 750.0, Unit::Millions)
            .weight(10.0)
            .category("Profitability")
            .prompt("What is the quarterly stock-based compensation run rate right now?")
            .context("A real cost that dilutes shareholders. What is the current quarterly burn?"),
        Assumption::new("ebitda_margin_current_quarter", 11.5, Unit::Percent)
            .weight(10.0)
            .category("Profitability")
            .prompt("What will adjusted EBITDA margin be this quarter?")
            .context("Before stock-based comp. Last quarter was ~11%. Is it improving?"),
        Assumption::new("true_profit_margin_current", 3.0, Unit::Percent)
            .weight(10.0)
            .category("Profitability")
            .prompt("What is the true profit margin this quarter (EBITDA minus stock-based comp)?")
            .context("What actually flows to shareholders after dilution."),
        // Churn & Retention
        Assumption::new("monthly_active_riders_growth", 1.0, Unit::Percent)
            .weight(7.0)
            .category("Churn & Retention")
            .prompt("What is monthly active platform consumer growth (MoM)?")
            .context("Gaining or losing users vs last month? Above 1% earns a 15x multiple, above 2% earns 18x."),
        Assumption::new("driver_churn_rate_monthly", 8.0, Unit::Percent)
            .weight(5.0)
            .category("Churn & Retention")
            .prompt("What share of active drivers churn each month?")
            .context("How many drivers who drove last month won't drive this month?"),
        Assumption::new("trips_per_active_user_mom", 0.5, Unit::Percent)
            .weight(6.0)
            .category("Churn & Retention")
            .prompt("Are trips per active user rising or falling vs last month?")
            .context("Positive means users take more trips. Negative means frequency is declining."),
        // Regulatory & Risk
        Assumption::new("regulatory_liabilities_on_books", 800.0, Unit::Millions)
            .weight(6.0)
            .category("Regulatory & Risk")
            .prompt("What regulatory liabilities sit on the balance sheet right now?")
            .context("CA AB5, UK employment cases, EU regulation. What is accrued today?"),
        Assumption::new("insurance_cost_trend", 2.0, Unit::Percent)
            .weight(5.0)
            .category("Regulatory & Risk")
            .prompt("Is insurance cost per trip rising or falling vs last quarter?")
            .context("Claims, accidents, fraud. Are costs going up or down?"),
        // Capital Allocation
        Assumption::new("share_buyback_last_quarter", 500.0, Unit::Millions)
            .weight(7.0)
            .category("Capital Allocation")
            .prompt("How much did Uber spend on share buybacks last quarter?")
            .context("A $7B authorization was announced. What was actually repurchased?"),
        Assumption::new("capex_run_rate", 100.0, Unit::Millions)
            .weight(3.0)
            .category("Capital Allocation")
            .prompt("What is the quarterly capex run rate right now?")
            .context("Data centers, office space, infrastructure."),
        // Autonomous Vehicles
        Assumption::new("waymo_market_share_phoenix", 5.0, Unit::Percent)
            .weight(4.0)
            .category("Autonomous Vehicles")
            .prompt("What share of Phoenix rideshare trips are now Waymo?")
            .context("Phoenix is Waymo's biggest market. How much share has it taken?"),
        Assumption::new("autonomous_rides_on_uber_current", 0.1, Unit::Percent)
            .weight(3.0)
            .category("Autonomous Vehicles")
            .prompt("What share of Uber rides this week are autonomous?")
            .context("Uber partners with Waymo in some cities. How much of total volume is AV?"),
        // Advertising & New Revenue
        Assumption::new("advertising_revenue_run_rate", 350.0, Unit::Millions)
            .weight(7.0)
            .category("Advertising & New Revenue")
            .prompt("What is the quarterly advertising revenue run rate right now?")
            .context("Restaurant ads and promoted listings. Last quarter was ~$300M. Growing?"),
        Assumption::new("advertising_margin", 85.0, Unit::Percent)
            .weight(6.0)
            .category("Advertising & New Revenue")
            .prompt("What is the gross margin on advertising revenue?")
            .context("Almost pure profit, or are there real costs to serve ads?"),
        // Competitive Dynamics
        Assumption::new("driver_switching_to_doordash", 60.0, Unit::Percent)
            .weight(4.0)
            .category("Competitive Dynamics")
            .prompt("What share of Uber Eats couriers also drive for DoorDash?")
            .context("Multi-homing weakens pricing power with drivers."),
        Assumption::new("consumer_switching_apps", 40.0, Unit::Percent)
            .weight(4.0)
            .category("Competitive Dynamics")
            .prompt("What share of Uber Eats users also use DoorDash regularly?")
            .context("Multi-homing weakens pricing power with consumers."),
        // International
        Assumption::new("international_revenue_pct", 35.0, Unit::Percent)
            .weight(5.0)
            .category("International")
            .prompt("What share of revenue comes from outside the US and Canada?")
            .context("International growth vs US maturity."),
        Assumption::new("international_margin_vs_us", -300.0, Unit::BasisPoints)
            .weight(5.0)
            .category("International")
            .prompt("How much lower are international margins than US margins?")
            .context("Negative means international is less profitable; -500 bps is 5 points lower."),
        // Other Bets
        Assumption::new("freight_quarterly_revenue", 300.0, Unit::Millions)
            .weight(2.0)
            .category("Other Bets")
            .prompt("What is Uber Freight revenue this quarter?")
            .context("Trucking logistics. Growing or shrinking?"),
    ])
}

fn multiple_for_growth(rider_growth: f64) -> f64 {
    if rider_growth > 2.0 {
        18.0
    } else if rider_growth > 1.0 {
        15.0
    } else {
        12.0
    }
}

pub(super) fn formula(inputs: &Inputs<'_>) -> Result<Valuation> {
    let quarterly_revenue = match inputs.answered("revenue_last_week")? {
        Some(weekly) => (weekly / 1000.0) * DAYS_PER_QUARTER / 7.0,
        None => LAST_QUARTER_REVENUE,
    };

    let avg_growth = (inputs.value("mobility_gmv_growth_mom")?
        + inputs.value("delivery_gmv_growth_mom")?)
        / 2.0;
    let annual_revenue = quarterly_revenue * 4.0 * (1.0 + avg_growth / 100.0).powf(MONTHS);

    let ebitda = annual_revenue * (inputs.value("ebitda_margin_current_quarter")? / 100.0);

    let sbc_annual = inputs.value("stock_based_comp_run_rate")? / 1000.0 * 4.0;
    let mut true_ebitda = ebitda - sbc_annual;
    true_ebitda -= inputs.value("regulatory_liabilities_on_books")? / 1000.0;

    let ad_revenue_annual = inputs.value("advertising_revenue_run_rate")? / 1000.0 * 4.0;
    let ad_margin = inputs.value("advertising_margin")? / 100.0;
    true_ebitda += ad_revenue_annual * ad_margin;

    let multiple = multiple_for_growth(inputs.value("monthly_active_riders_growth")?);
    let enterprise_value = true_ebitda * multiple;
    let equity_value = enterprise_value - NET_DEBT;

    let buyback_annual = inputs.value("share_buyback_last_quarter")? / 1000.0 * 4.0;
    let shares = SHARES_OUTSTANDING - buyback_annual / BUYBACK_PRICE;

    let fair_value = equity_value / shares;

    Ok(Valuation {
        fair_value_per_share: round_to(fair_value, 2),
        metrics: vec![
            Metric::new(
                "annual_revenue",
                "Annual Revenue",
                round_to(annual_revenue, 2),
                Unit::Billions,
            ),
            Metric::new(
                "true_ebitda",
                "True EBITDA (after SBC)",
                round_to(true_ebitda, 2),
                Unit::Billions,
            ),
            Metric::new("multiple_used", "Multiple Used", multiple, Unit::Multiple),
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
            Metric::new(
                "shares_outstanding",
                "Shares Outstanding",
                round_to(shares, 3),
                Unit::BillionShares,
            ),
        ],
    })
}
