//! Non-interactive walkthrough of one model

use std::io::Write;

use fairvalue_core::{Session, ValuationModel};

use crate::report;
use crate::util::Palette;

/// Sample answers for the first question of each preset
const EXAMPLE_ANSWERS: &[(&str, f64)] = &[("ebitda_margin_2027", 17.0), ("revenue_last_week", 750.0)];

/// Show the baseline, answer the first question with a sample value, then
/// print the resulting report and sweep. Nothing is saved.
pub fn run_demo(
    model: ValuationModel,
    out: &mut impl Write,
    palette: Palette,
    position_millions: f64,
) -> color_eyre::Result<()> {
    let mut session = Session::new(model);
    tracing::info!(model = %session.model().kind, "Running demo");

    report::write_banner(out, palette, &format!("DEMO MODE: {}", session.model().title))?;
    writeln!(out, "\nStarting from the baseline estimates:")?;
    report::write_valuation(out, palette, &session.valuate()?, &session.assess()?, position_millions)?;

    let Some(assumption) = session.next_unanswered() else {
        return Ok(());
    };
    let (id, default_value) = (assumption.id, assumption.default_value);
    let value = EXAMPLE_ANSWERS
        .iter()
        .find(|(example, _)| *example == id)
        .map_or(default_value, |&(_, value)| value);

    report::write_question(out, palette, assumption, session.progress())?;
    writeln!(out, "\nExample answer: {}", assumption.unit.format(value))?;

    let update = session.update(id, value)?;
    report::write_update(out, palette, &update, position_millions)?;

    if session.can_sweep() {
        let entries = session.sensitivity()?;
        report::write_sensitivity(
            out,
            palette,
            session.table(),
            &entries,
            session.model().sweep_display_limit,
        )?;
    } else {
        writeln!(
            out,
            "\nThe sensitivity sweep unlocks after {} answers.",
            session.model().min_sweep_answers
        )?;
    }

    writeln!(out, "\nRun without --demo to answer the questions yourself.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consensus_demo() {
        let mut out = Vec::new();
        run_demo(ValuationModel::consensus(), &mut out, Palette::plain(), 1.0).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("FAIR VALUE: $22.85/share"));
        assert!(text.contains("Example answer: 17%"));
        assert!(text.contains("Fair value now:    $31.07/share"));
        assert!(text.contains("SENSITIVITY ANALYSIS"));
    }

    #[test]
    fn test_interview_demo_skips_sweep() {
        let mut out = Vec::new();
        run_demo(ValuationModel::interview(), &mut out, Palette::plain(), 1.0).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("FAIR VALUE: $12.97/share"));
        assert!(text.contains("Example answer: $750M"));
        assert!(text.contains("unlocks after 3 answers"));
        assert!(!text.contains("SENSITIVITY ANALYSIS"));
    }
}
