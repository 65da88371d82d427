//! Engine-wide properties checked against both presets

use crate::config::{ModelKind, ValuationModel};
use crate::evaluate::{resolve, update, valuate};
use crate::model::Overrides;
use crate::session::{Session, next_unanswered};

/// A few overrides away from every default
fn sample_overrides(model: &ValuationModel) -> Overrides {
    let mut overrides = Overrides::new();
    for assumption in model.table.iter().step_by(2) {
        overrides.insert(assumption.id, assumption.default_value * 1.1 + 0.5);
    }
    overrides
}

#[test]
fn test_valuate_is_deterministic() {
    for kind in ModelKind::ALL {
        let model = kind.model();
        let overrides = sample_overrides(&model);
        let first = valuate(&model, &overrides).unwrap();
        let second = valuate(&model, &overrides).unwrap();
        assert_eq!(first, second, "{kind} valuation changed between calls");
    }
}

#[test]
fn test_override_takes_precedence_over_default() {
    for kind in ModelKind::ALL {
        let model = kind.model();
        for assumption in &model.table {
            let mut overrides = Overrides::new();
            assert_eq!(
                resolve(&model.table, &overrides, assumption.id).unwrap(),
                assumption.default_value
            );

            let value = assumption.default_value - 3.25;
            overrides.insert(assumption.id, value);
            assert_eq!(resolve(&model.table, &overrides, assumption.id).unwrap(), value);
        }
    }
}

#[test]
fn test_resolve_unknown_id_fails() {
    let model = ValuationModel::consensus();
    assert!(resolve(&model.table, &Overrides::new(), "not_a_real_id").is_err());
}

#[test]
fn test_delta_matches_recomputed_difference() {
    for kind in ModelKind::ALL {
        let model = kind.model();
        let base = sample_overrides(&model);

        for assumption in &model.table {
            let value = assumption.default_value * 1.3 + 1.0;
            let before = valuate(&model, &base).unwrap().fair_value_per_share;

            let mut after_set = base.clone();
            after_set.insert(assumption.id, value);
            let after = valuate(&model, &after_set).unwrap().fair_value_per_share;

            let mut overrides = base.clone();
            let report = update(&model, &mut overrides, assumption.id, value).unwrap();

            assert!(
                (report.delta - (after - before)).abs() < 1e-9,
                "{kind}/{}: delta {} vs {}",
                assumption.id,
                report.delta,
                after - before
            );
            assert_eq!(overrides, after_set);
        }
    }
}

#[test]
fn test_sweep_leaves_overrides_untouched() {
    for kind in ModelKind::ALL {
        let mut session = Session::new(kind.model());
        let model = kind.model();
        for (id, value) in sample_overrides(&model).iter() {
            session.update(id, value).unwrap();
        }
        let before = session.overrides().clone();

        session.sensitivity().unwrap();

        assert_eq!(session.overrides(), &before, "{kind} sweep leaked an override");
    }
}

#[test]
fn test_sweep_sorted_descending() {
    for kind in ModelKind::ALL {
        let model = kind.model();
        let mut overrides = Overrides::new();
        for assumption in &model.table {
            overrides.insert(assumption.id, assumption.default_value);
        }

        let ranked = crate::analysis::sensitivity(&model, &overrides).unwrap();
        assert_eq!(ranked.len(), model.table.len());
        for pair in ranked.windows(2) {
            assert!(pair[0].impact >= pair[1].impact);
            if pair[0].impact == pair[1].impact {
                let a = model.table.position(pair[0].id).unwrap();
                let b = model.table.position(pair[1].id).unwrap();
                assert!(a < b, "tie between {} and {} out of table order", pair[0].id, pair[1].id);
            }
        }
    }
}

#[test]
fn test_next_unanswered_walks_table_order() {
    let model = ValuationModel::consensus();
    let mut session = Session::new(model.clone());
    let mut asked = Vec::new();

    while let Some(assumption) = session.next_unanswered() {
        let id = assumption.id;
        let value = assumption.default_value;
        asked.push(id);
        session.update(id, value).unwrap();
    }

    let expected: Vec<&str> = model.table.iter().map(|a| a.id).collect();
    assert_eq!(asked, expected);
    assert!(session.progress().is_complete());
    assert!(next_unanswered(&model.table, session.overrides()).is_none());
}

#[test]
fn test_next_unanswered_skips_out_of_order_answers() {
    let mut session = Session::new(ValuationModel::consensus());
    session.update("ebitda_margin_2027", 16.0).unwrap();
    session.update("delivery_take_rate_2027", 22.0).unwrap();

    assert_eq!(
        session.next_unanswered().map(|a| a.id),
        Some("regulatory_cost_annual")
    );
    let progress = session.progress();
    assert_eq!((progress.answered, progress.total), (2, 8));
}

#[test]
fn test_restore_drops_unknown_ids() {
    let mut session = Session::new(ValuationModel::consensus());
    session.update("ebitda_multiple", 30.0).unwrap();

    let rejected = session.restore(vec![
        ("ebitda_margin_2027".to_string(), 17.0),
        ("revenue_last_week".to_string(), 721.0),
    ]);

    assert_eq!(rejected, vec!["revenue_last_week".to_string()]);
    assert_eq!(session.overrides().len(), 1);
    assert_eq!(session.overrides().get("ebitda_margin_2027"), Some(17.0));
    assert!(!session.overrides().contains("ebitda_multiple"));
    assert!((session.valuate().unwrap().fair_value_per_share - 31.07).abs() < 1e-9);
}

#[test]
fn test_overrides_serialize_as_flat_map() {
    let mut session = Session::new(ValuationModel::consensus());
    session.update("ebitda_margin_2027", 17.0).unwrap();
    session.update("ebitda_multiple", 18.0).unwrap();

    let json = serde_json::to_string(session.overrides()).unwrap();
    assert_eq!(json, r#"{"ebitda_margin_2027":17.0,"ebitda_multiple":18.0}"#);
}

#[test]
fn test_reset_returns_to_baseline() {
    let mut session = Session::new(ValuationModel::consensus());
    let baseline = session.valuate().unwrap();
    session.update("ebitda_multiple", 25.0).unwrap();

    session.reset();

    assert!(session.overrides().is_empty());
    assert_eq!(session.valuate().unwrap(), baseline);
}
