//! Tests for the CEO interview preset
//!
//! These tests verify that:
//! - The unanswered baseline uses last quarter's reported revenue
//! - Answering the weekly revenue question switches the revenue base
//! - Rider growth picks the 12x/15x/18x multiple
//! - Sweeps and edits only touch answered questions

use crate::analysis::{Direction, Verdict};
use crate::config::ValuationModel;
use crate::error::ValuationError;
use crate::session::Session;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn answered(answers: &[(&str, f64)]) -> Session {
    let mut session = Session::new(ValuationModel::interview());
    for &(id, value) in answers {
        session.update(id, value).unwrap();
    }
    session
}

#[test]
fn test_unanswered_baseline() {
    let valuation = answered(&[]).valuate().unwrap();

    assert_close(valuation.fair_value_per_share, 12.97);
    assert_close(valuation.metric("annual_revenue").unwrap(), 45.81);
    assert_close(valuation.metric("true_ebitda").unwrap(), 2.66);
    assert_close(valuation.metric("enterprise_value").unwrap(), 31.9);
    assert_close(valuation.metric("equity_value").unwrap(), 26.9);
    assert_eq!(valuation.metric("multiple_used"), Some(12.0));
    assert_close(valuation.metric("shares_outstanding").unwrap(), 2.073);
}

#[test]
fn test_answering_weekly_revenue_changes_base() {
    // The baseline answer annualizes to slightly more than last quarter's $9.3B
    let session = answered(&[("revenue_last_week", 721.0)]);
    let valuation = session.valuate().unwrap();

    assert_close(valuation.metric("annual_revenue").unwrap(), 46.3);
    assert_close(valuation.fair_value_per_share, 13.3);
}

#[test]
fn test_rider_growth_selects_multiple() {
    let medium = answered(&[
        ("revenue_last_week", 721.0),
        ("monthly_active_riders_growth", 1.5),
        ("stock_based_comp_run_rate", 750.0),
    ])
    .valuate()
    .unwrap();
    assert_eq!(medium.metric("multiple_used"), Some(15.0));
    assert_close(medium.fair_value_per_share, 17.22);

    let high = answered(&[("monthly_active_riders_growth", 2.5)])
        .valuate()
        .unwrap();
    assert_eq!(high.metric("multiple_used"), Some(18.0));
    assert_close(high.fair_value_per_share, 20.67);
}

#[test]
fn test_sweep_covers_answered_only_with_table_order_ties() {
    let session = answered(&[
        ("capex_run_rate", 100.0),
        ("ebitda_margin_current_quarter", 11.5),
        ("revenue_last_week", 721.0),
    ]);
    let ranked = session.sensitivity().unwrap();

    let order: Vec<&str> = ranked.iter().map(|e| e.id).collect();
    assert_eq!(
        order,
        vec![
            "revenue_last_week",
            "ebitda_margin_current_quarter",
            "capex_run_rate"
        ]
    );
    assert_close(ranked[0].impact, 12.33);
    assert_close(ranked[0].low, 7.13);
    assert_close(ranked[0].high, 19.46);
    assert_eq!(ranked[0].impact, ranked[1].impact);
    assert_eq!(ranked[2].impact, 0.0);
}

#[test]
fn test_sweep_needs_three_answers() {
    let session = answered(&[("revenue_last_week", 721.0), ("capex_run_rate", 100.0)]);
    assert!(!session.can_sweep());

    let session = answered(&[
        ("revenue_last_week", 721.0),
        ("capex_run_rate", 100.0),
        ("advertising_margin", 85.0),
    ]);
    assert!(session.can_sweep());
}

#[test]
fn test_sweep_with_no_answers_is_empty() {
    assert!(answered(&[]).sensitivity().unwrap().is_empty());
}

#[test]
fn test_edit_requires_prior_answer() {
    let mut session = answered(&[("capex_run_rate", 100.0)]);

    let err = session.edit("advertising_margin", 90.0).unwrap_err();
    assert_eq!(
        err,
        ValuationError::NotAnswered("advertising_margin".to_string())
    );
    assert!(!session.overrides().contains("advertising_margin"));

    let report = session.edit("capex_run_rate", 150.0).unwrap();
    assert_eq!(report.previous, Some(100.0));
    assert_eq!(report.delta, 0.0);

    let err = session.edit("bogus", 1.0).unwrap_err();
    assert_eq!(err, ValuationError::UnknownAssumption("bogus".to_string()));
}

#[test]
fn test_fair_band_of_ten_dollars() {
    let session = answered(&[]);
    assert_eq!(session.assess().unwrap().verdict, Verdict::Overvalued);

    let session = Session::new(ValuationModel::interview().with_market_price(20.0));
    assert_eq!(session.assess().unwrap().verdict, Verdict::FairlyValued);
}

#[test]
fn test_review_groups_by_category() {
    let session = answered(&[
        ("share_buyback_last_quarter", 400.0),
        ("revenue_last_week", 800.0),
        ("delivery_gmv_growth_mom", 1.5),
        ("capex_run_rate", 120.0),
    ]);
    let review = session.review();

    let categories: Vec<&str> = review.iter().map(|g| g.category).collect();
    assert_eq!(categories, vec!["Revenue & Growth", "Capital Allocation"]);

    let revenue = &review[0].entries;
    assert_eq!(revenue[0].id, "revenue_last_week");
    assert_eq!(revenue[0].direction, Direction::Above);
    assert_eq!(revenue[1].id, "delivery_gmv_growth_mom");
    assert_eq!(revenue[1].direction, Direction::AtBaseline);

    let capital = &review[1].entries;
    assert_eq!(capital[0].id, "share_buyback_last_quarter");
    assert_eq!(capital[0].direction, Direction::Below);
    assert_eq!(capital[1].direction, Direction::Above);
}
