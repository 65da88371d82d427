//! Text rendering of engine results
//!
//! Each function writes one block of menu output. None of them touch the
//! session; the caller passes in whatever was computed.

use std::io::{self, Write};

use fairvalue_core::analysis::{CategoryReview, Direction, MarketAssessment, SensitivityEntry, Verdict};
use fairvalue_core::evaluate::round_to;
use fairvalue_core::model::{Assumption, AssumptionTable, ImpactLevel, UpdateReport, Valuation};
use fairvalue_core::session::Progress;

use crate::util::{Palette, format_currency, format_millions, format_percent_change, format_signed_currency};

const RULE_WIDTH: usize = 70;

pub fn write_banner(out: &mut impl Write, palette: Palette, title: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{}", palette.header(rule.as_str()))?;
    writeln!(out, "{}", palette.header(title))?;
    writeln!(out, "{}", palette.header(rule.as_str()))
}

/// Fair value, market comparison, and the formula's intermediate figures
pub fn write_valuation(
    out: &mut impl Write,
    palette: Palette,
    valuation: &Valuation,
    assessment: &MarketAssessment,
    position_millions: f64,
) -> io::Result<()> {
    writeln!(
        out,
        "\nFAIR VALUE: {}/share",
        palette.header(format_currency(valuation.fair_value_per_share))
    )?;
    writeln!(
        out,
        "Market price: {}/share",
        format_currency(assessment.market_price)
    )?;
    write_assessment(out, palette, assessment, position_millions)?;

    writeln!(out, "\n--- Model Details ---")?;
    for metric in &valuation.metrics {
        writeln!(out, "{}: {}", metric.label, metric.unit.format(metric.value))?;
    }
    Ok(())
}

fn write_assessment(
    out: &mut impl Write,
    palette: Palette,
    assessment: &MarketAssessment,
    position_millions: f64,
) -> io::Result<()> {
    let gap = format!(
        "{} ({:.1}%)",
        format_currency(assessment.diff.abs()),
        assessment.diff_pct.abs()
    );
    let position = format_millions(position_millions * assessment.position_multiple());

    match assessment.verdict {
        Verdict::Undervalued => {
            writeln!(out, "\n{}", palette.positive(format!("UNDERVALUED by {gap}")))?;
            writeln!(
                out,
                "   Your {} position could be worth {position}",
                format_millions(position_millions)
            )?;
            writeln!(out, "   Action: consider buying more")
        }
        Verdict::Overvalued => {
            writeln!(out, "\n{}", palette.negative(format!("OVERVALUED by {gap}")))?;
            writeln!(
                out,
                "   Your {} position might be worth {position}",
                format_millions(position_millions)
            )?;
            writeln!(out, "   Action: consider trimming the position")
        }
        Verdict::FairlyValued => {
            writeln!(out, "\n{}", palette.warning("FAIRLY VALUED"))?;
            writeln!(out, "   Action: hold the current position")
        }
    }
}

/// The question being asked, its context, and the baseline to fall back on
pub fn write_question(
    out: &mut impl Write,
    palette: Palette,
    assumption: &Assumption,
    progress: Progress,
) -> io::Result<()> {
    write_banner(
        out,
        palette,
        &format!("QUESTION {} of {}", progress.answered + 1, progress.total),
    )?;
    writeln!(out, "\nCategory: {}", assumption.category)?;
    writeln!(out, "\n{}", assumption.prompt)?;
    if !assumption.context.is_empty() {
        writeln!(out, "\n{}", palette.help(format!("Why this matters: {}", assumption.context)))?;
    }
    writeln!(
        out,
        "\nBaseline estimate: {}",
        assumption.unit.format(assumption.default_value)
    )?;
    writeln!(
        out,
        "{}",
        palette.help(format!(
            "(No opinion? Enter {} to keep the baseline)",
            assumption.default_value
        ))
    )
}

/// Before/after fair value for one override
pub fn write_update(
    out: &mut impl Write,
    palette: Palette,
    report: &UpdateReport,
    position_millions: f64,
) -> io::Result<()> {
    writeln!(out, "\n{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "{}", palette.positive("ESTIMATE UPDATED"))?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    writeln!(out, "\nFair value before: {}/share", format_currency(report.old_fair_value))?;
    writeln!(out, "Fair value now:    {}/share", format_currency(report.new_fair_value))?;

    let change = match report.delta_pct {
        Some(pct) => format!(
            "{}/share ({})",
            format_signed_currency(report.delta),
            format_percent_change(pct)
        ),
        None => format!("{}/share", format_signed_currency(report.delta)),
    };
    writeln!(out, "\nImpact: {}", palette.signed(report.delta, change))?;

    match report.impact_level() {
        ImpactLevel::Huge => writeln!(
            out,
            "\n{}",
            palette.negative(format!(
                "HUGE IMPACT! This estimate moved the valuation by ${:.0}/share",
                report.delta.abs()
            ))
        )?,
        ImpactLevel::High => writeln!(
            out,
            "\n{}",
            palette.warning("HIGH IMPACT estimate - this one really matters")
        )?,
        ImpactLevel::Normal => {}
    }

    if let Some(multiple) = report.position_multiple() {
        let worth = position_millions * multiple;
        writeln!(
            out,
            "\nYour {} position is now worth {} (change: {})",
            format_millions(position_millions),
            format_millions(worth),
            palette.signed(worth - position_millions, signed_millions(worth - position_millions))
        )?;
    }
    Ok(())
}

fn signed_millions(value: f64) -> String {
    if value < 0.0 {
        format_millions(value)
    } else {
        format!("+{}", format_millions(value))
    }
}

pub fn write_progress(out: &mut impl Write, progress: Progress) -> io::Result<()> {
    writeln!(
        out,
        "\nProgress: {}/{} questions answered",
        progress.answered, progress.total
    )
}

/// Numbered list of assumptions with their current values
pub fn write_assumption_list<'a>(
    out: &mut impl Write,
    palette: Palette,
    rows: impl IntoIterator<Item = (usize, &'a Assumption, Option<f64>)>,
) -> io::Result<()> {
    for (number, assumption, answer) in rows {
        let (marker, value) = match answer {
            Some(value) => (palette.positive("yours"), value),
            None => (palette.help("base "), assumption.default_value),
        };
        writeln!(
            out,
            "{number:>2}. [{marker}] {} (current: {})",
            truncate(assumption.prompt, 50),
            assumption.unit.format(value)
        )?;
    }
    Ok(())
}

/// Ranked sweep results, showing at most `limit` rows.
///
/// Probe values are rounded for display only.
pub fn write_sensitivity(
    out: &mut impl Write,
    palette: Palette,
    table: &AssumptionTable,
    entries: &[SensitivityEntry],
    limit: usize,
) -> io::Result<()> {
    write_banner(out, palette, "SENSITIVITY ANALYSIS")?;
    if entries.is_empty() {
        return writeln!(out, "\nNothing to test yet.");
    }
    writeln!(out, "\nEach estimate moved ±20% on its own:\n")?;

    for (rank, entry) in entries.iter().take(limit).enumerate() {
        let Some(assumption) = table.get(entry.id) else {
            continue;
        };
        writeln!(out, "{}. {}", rank + 1, assumption.prompt)?;
        writeln!(out, "   Current: {}", assumption.unit.format(entry.current))?;
        writeln!(
            out,
            "   At {}: FV = {}",
            assumption.unit.format(round_to(entry.low_value, 4)),
            format_currency(entry.low)
        )?;
        writeln!(
            out,
            "   At {}: FV = {}",
            assumption.unit.format(round_to(entry.high_value, 4)),
            format_currency(entry.high)
        )?;
        writeln!(
            out,
            "   Impact range: {}",
            palette.warning(format!("{}/share", format_currency(entry.impact)))
        )?;
        writeln!(out)?;
    }

    let focus = limit.min(entries.len()).min(3);
    writeln!(
        out,
        "{}",
        palette.help(format!("Focus on validating the top {focus} estimates above."))
    )
}

/// Recorded answers grouped by category, marked against the baseline
pub fn write_review(
    out: &mut impl Write,
    palette: Palette,
    table: &AssumptionTable,
    review: &[CategoryReview],
) -> io::Result<()> {
    write_banner(out, palette, "YOUR ANSWERS")?;
    if review.is_empty() {
        return writeln!(out, "\nNo answers recorded yet.");
    }

    for group in review {
        writeln!(out, "\n{}", palette.header(group.category))?;
        for entry in &group.entries {
            let Some(assumption) = table.get(entry.id) else {
                continue;
            };
            let marker = match entry.direction {
                Direction::Above => palette.positive("+"),
                Direction::Below => palette.negative("-"),
                Direction::AtBaseline => "=".to_string(),
            };
            writeln!(out, "   {marker} {}", assumption.prompt)?;
            writeln!(
                out,
                "      Your answer: {} (baseline: {})",
                assumption.unit.format(entry.value),
                assumption.unit.format(entry.baseline)
            )?;
        }
    }
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairvalue_core::{Session, ValuationModel};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_valuation_block() {
        let session = Session::new(ValuationModel::consensus());
        let valuation = session.valuate().unwrap();
        let assessment = session.assess().unwrap();

        let text = render(|out| write_valuation(out, Palette::plain(), &valuation, &assessment, 1.0));

        assert!(text.contains("FAIR VALUE: $22.85/share"));
        assert!(text.contains("OVERVALUED by $52.15 (69.5%)"));
        assert!(text.contains("position might be worth $0.30M"));
        assert!(text.contains("2027 Revenue: $57.6B"));
        assert!(text.contains("Equity Value: $47.98B"));
    }

    #[test]
    fn test_update_block() {
        let mut session = Session::new(ValuationModel::consensus());
        let report = session.update("ebitda_margin_2027", 17.0).unwrap();

        let text = render(|out| write_update(out, Palette::plain(), &report, 1.0));

        assert!(text.contains("Fair value before: $22.85/share"));
        assert!(text.contains("Fair value now:    $31.07/share"));
        assert!(text.contains("Impact: +$8.22/share (+36.0%)"));
        assert!(text.contains("HIGH IMPACT"));
        assert!(text.contains("now worth $1.36M (change: +$0.36M)"));
    }

    #[test]
    fn test_sensitivity_block_respects_limit() {
        let session = Session::new(ValuationModel::consensus());
        let entries = session.sensitivity().unwrap();

        let text = render(|out| write_sensitivity(out, Palette::plain(), session.table(), &entries, 5));

        assert!(text.contains("1. "));
        assert!(text.contains("5. "));
        assert!(!text.contains("6. "));
        assert!(text.contains("Impact range: $24.69/share"));
        assert!(text.contains("At 12%: FV = $10.50"));
    }

    #[test]
    fn test_review_block_markers() {
        let mut session = Session::new(ValuationModel::interview());
        session.update("revenue_last_week", 800.0).unwrap();
        session.update("share_buyback_last_quarter", 400.0).unwrap();

        let text = render(|out| write_review(out, Palette::plain(), session.table(), &session.review()));

        assert!(text.contains("Revenue & Growth"));
        assert!(text.contains("   + "));
        assert!(text.contains("   - "));
        assert!(text.contains("baseline: $721M"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 50), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }
}
