//! Interactive menu over one valuation session

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use fairvalue_core::model::Assumption;
use fairvalue_core::{ModelKind, Scope, Session, ValuationError, ValuationModel};

use crate::data::{DataDirectory, SavedState, StorageError};
use crate::prompt::Prompter;
use crate::report;
use crate::util::{Palette, format_currency};

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Show,
    AnswerNext,
    Edit,
    Sweep,
    Review,
    SaveAndExit,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Show),
            "2" => Some(MenuChoice::AnswerNext),
            "3" => Some(MenuChoice::Edit),
            "4" => Some(MenuChoice::Sweep),
            "5" => Some(MenuChoice::Review),
            "6" => Some(MenuChoice::SaveAndExit),
            "q" | "Q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// How the menu loop ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
    /// Saved to the given file
    Saved(PathBuf),
    Quit,
    /// Input closed before the user chose to leave
    EndOfInput,
}

/// Build a session for `model`, restoring saved overrides unless `fresh`.
///
/// Saved ids the model no longer knows are dropped with a warning.
pub fn open_session(storage: &DataDirectory, model: ValuationModel, fresh: bool) -> Result<Session, StorageError> {
    let mut session = Session::new(model);
    if fresh {
        tracing::info!(model = %session.model().kind, "Starting fresh, ignoring saved state");
        return Ok(session);
    }

    if let Some(saved) = storage.load_state(session.model())? {
        let rejected = session.restore(saved.overrides);
        for id in &rejected {
            tracing::warn!(id = %id, "Dropping saved value for unknown assumption");
        }
        tracing::info!(
            model = %session.model().kind,
            answers = session.overrides().len(),
            saved_at = %saved.timestamp,
            "Restored saved session"
        );
    }
    Ok(session)
}

pub struct App<R, W> {
    session: Session,
    storage: DataDirectory,
    position_millions: f64,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(session: Session, storage: DataDirectory, position_millions: f64, prompter: Prompter<R, W>) -> Self {
        Self {
            session,
            storage,
            position_millions,
            prompter,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run the menu until the user saves, quits, or input ends
    pub fn run(&mut self) -> io::Result<Exit> {
        let palette = self.prompter.palette();
        report::write_banner(self.prompter.out(), palette, self.session.model().title)?;
        let progress = self.session.progress();
        if progress.answered > 0 {
            writeln!(
                self.prompter.out(),
                "\nResuming with {} of {} answers.",
                progress.answered,
                progress.total
            )?;
        }

        loop {
            self.write_menu()?;
            let Some(line) = self.prompter.read_line("\nYour choice (1-6 or q): ")? else {
                tracing::info!("Input closed, leaving without saving");
                return Ok(Exit::EndOfInput);
            };
            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.prompter.out(), "\nInvalid choice {line:?}.")?;
                continue;
            };
            tracing::debug!(?choice, "Menu selection");

            match choice {
                MenuChoice::Show => self.show()?,
                MenuChoice::AnswerNext => self.answer_next()?,
                MenuChoice::Edit => self.edit()?,
                MenuChoice::Sweep => self.sweep()?,
                MenuChoice::Review => self.review()?,
                MenuChoice::SaveAndExit => {
                    if let Some(path) = self.save()? {
                        return Ok(Exit::Saved(path));
                    }
                }
                MenuChoice::Quit => {
                    writeln!(self.prompter.out(), "\nExiting without saving.")?;
                    tracing::info!("Quit without saving");
                    return Ok(Exit::Quit);
                }
            }
        }
    }

    fn write_menu(&mut self) -> io::Result<()> {
        let palette = self.prompter.palette();
        let progress = self.session.progress();
        let out = self.prompter.out();
        report::write_banner(out, palette, "WHAT DO YOU WANT TO DO?")?;
        writeln!(out, "\n1. Show current valuation")?;
        writeln!(
            out,
            "2. Answer the next question ({}/{} answered)",
            progress.answered, progress.total
        )?;
        writeln!(out, "3. Update a specific answer")?;
        writeln!(out, "4. Sensitivity analysis")?;
        writeln!(out, "5. Review your answers")?;
        writeln!(out, "6. Save & exit")?;
        writeln!(out, "q. Quit without saving")
    }

    fn engine_error(&mut self, err: &ValuationError) -> io::Result<()> {
        tracing::error!(error = %err, "Valuation failed");
        let message = self.prompter.palette().negative(format!("Error: {err}"));
        writeln!(self.prompter.out(), "\n{message}")
    }

    fn show(&mut self) -> io::Result<()> {
        let result = self
            .session
            .valuate()
            .and_then(|valuation| Ok((valuation, self.session.assess()?)));
        let (valuation, assessment) = match result {
            Ok(pair) => pair,
            Err(err) => return self.engine_error(&err),
        };

        let palette = self.prompter.palette();
        let out = self.prompter.out();
        report::write_banner(out, palette, self.session.model().title)?;
        report::write_valuation(out, palette, &valuation, &assessment, self.position_millions)?;

        if self.session.overrides().is_empty() {
            writeln!(out, "\nNo answers yet: every figure is a baseline estimate.")?;
            writeln!(out, "{}", palette.help("Choose 2 to start overriding them one at a time."))?;
        } else {
            report::write_progress(out, self.session.progress())?;
        }
        Ok(())
    }

    fn answer_next(&mut self) -> io::Result<()> {
        let palette = self.prompter.palette();
        let progress = self.session.progress();
        let Some(assumption) = self.session.next_unanswered() else {
            let out = self.prompter.out();
            report::write_banner(out, palette, "ALL QUESTIONS ANSWERED")?;
            writeln!(out, "\nYour valuation now rests entirely on your own estimates.")?;
            return writeln!(out, "Use 3 to revise an answer or 4 to see which ones matter most.");
        };
        let (id, unit) = (assumption.id, assumption.unit);
        report::write_question(self.prompter.out(), palette, assumption, progress)?;

        let Some(value) = self
            .prompter
            .read_number(&format!("\nYour estimate ({}): ", unit.symbol()))?
        else {
            return writeln!(self.prompter.out(), "\nSkipping this question...");
        };

        let first_answer = self.session.overrides().is_empty();
        let report = match self.session.update(id, value) {
            Ok(report) => report,
            Err(err) => return self.engine_error(&err),
        };

        let out = self.prompter.out();
        if first_answer && self.session.model().kind == ModelKind::Interview {
            writeln!(out, "\n{}", palette.positive("ANSWER RECORDED"))?;
            writeln!(
                out,
                "\nInitial fair value: {}/share",
                format_currency(report.new_fair_value)
            )?;
        } else {
            report::write_update(out, palette, &report, self.position_millions)?;
        }
        report::write_progress(out, self.session.progress())
    }

    fn edit(&mut self) -> io::Result<()> {
        let palette = self.prompter.palette();
        let scope = self.session.model().edit_scope;
        let overrides = self.session.overrides();
        let rows: Vec<(usize, &Assumption, Option<f64>)> = self
            .session
            .table()
            .iter()
            .enumerate()
            .filter(|(_, a)| scope == Scope::All || overrides.contains(a.id))
            .map(|(i, a)| (i + 1, a, overrides.get(a.id)))
            .collect();

        if rows.is_empty() {
            writeln!(self.prompter.out(), "\nNo answers to update yet.")?;
            return writeln!(self.prompter.out(), "Choose 2 to answer the next question.");
        }
        writeln!(self.prompter.out(), "\nAvailable answers to update:")?;
        report::write_assumption_list(self.prompter.out(), palette, rows)?;

        let Some(line) = self.prompter.read_line("\nWhich one? (number): ")? else {
            return Ok(());
        };
        let Some(assumption) = line.parse::<usize>().ok().and_then(|n| self.session.table().nth(n)) else {
            return writeln!(self.prompter.out(), "\n{}", palette.negative("Invalid selection."));
        };
        let (id, unit, prompt) = (assumption.id, assumption.unit, assumption.prompt);

        if scope == Scope::Answered && !self.session.overrides().contains(id) {
            return writeln!(
                self.prompter.out(),
                "\n{}",
                palette.warning("You haven't answered that question yet.")
            );
        }
        let current = match self.session.resolve(id) {
            Ok(value) => value,
            Err(err) => return self.engine_error(&err),
        };
        writeln!(self.prompter.out(), "\n{prompt}")?;
        writeln!(self.prompter.out(), "Current: {}", unit.format(current))?;

        let Some(value) = self
            .prompter
            .read_number(&format!("New estimate ({}): ", unit.symbol()))?
        else {
            return writeln!(self.prompter.out(), "\nUpdate abandoned.");
        };

        match self.session.edit(id, value) {
            Ok(report) => report::write_update(self.prompter.out(), palette, &report, self.position_millions),
            Err(err) => self.engine_error(&err),
        }
    }

    fn sweep(&mut self) -> io::Result<()> {
        let palette = self.prompter.palette();
        if !self.session.can_sweep() {
            let message = format!(
                "Answer at least {} questions first to see sensitivity analysis.",
                self.session.model().min_sweep_answers
            );
            return writeln!(self.prompter.out(), "\n{}", palette.warning(message));
        }

        let entries = match self.session.sensitivity() {
            Ok(entries) => entries,
            Err(err) => return self.engine_error(&err),
        };
        report::write_sensitivity(
            self.prompter.out(),
            palette,
            self.session.table(),
            &entries,
            self.session.model().sweep_display_limit,
        )
    }

    fn review(&mut self) -> io::Result<()> {
        let palette = self.prompter.palette();
        let review = self.session.review();
        report::write_review(self.prompter.out(), palette, self.session.table(), &review)
    }

    /// Save the session; a failure is reported and the session stays open
    fn save(&mut self) -> io::Result<Option<PathBuf>> {
        let timestamp = jiff::Zoned::now().datetime();
        let result = SavedState::capture(&self.session, timestamp)
            .map_err(|e| StorageError::Serialize(e.to_string()))
            .and_then(|state| self.storage.save_state(self.session.model(), &state));

        let palette = self.prompter.palette();
        match result {
            Ok(path) => {
                writeln!(
                    self.prompter.out(),
                    "\n{} Saved {} answers to {}",
                    palette.positive("✓"),
                    self.session.overrides().len(),
                    path.display()
                )?;
                writeln!(self.prompter.out(), "See you next time!")?;
                Ok(Some(path))
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to save session");
                writeln!(
                    self.prompter.out(),
                    "\n{}",
                    palette.negative(format!("Could not save: {err}"))
                )?;
                writeln!(self.prompter.out(), "Your answers are still here; try again or quit.")?;
                Ok(None)
            }
        }
    }
}
