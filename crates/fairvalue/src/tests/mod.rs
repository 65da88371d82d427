//! Scripted menu sessions
//!
//! Tests are organized by topic:
//! - `menu` - Answering, editing, sweeping, and quitting through stdin
//! - `persistence` - Saving, restoring, and failed saves


use fairvalue_core::{Session, ValuationModel};
use tempfile::TempDir;

use crate::app::{App, Exit};
use crate::data::DataDirectory;
use crate::prompt::Prompter;
use crate::util::Palette;

/// Run the menu over `input` and return how it ended, the final session, and the output
fn run_script(session: Session, storage: DataDirectory, input: &str) -> (Exit, Session, String) {
    let prompter = Prompter::new(input.as_bytes(), Vec::new(), Palette::plain());
    let mut app = App::new(session, storage, 1.0, prompter);
    let exit = app.run().unwrap();
    let session = app.session().clone();
    let output = String::from_utf8(app.into_output()).unwrap();
    (exit, session, output)
}

fn temp_storage() -> (TempDir, DataDirectory) {
    let temp_dir = TempDir::new().unwrap();
    let storage = DataDirectory::new(temp_dir.path().join("data"));
    (temp_dir, storage)
}

fn consensus() -> Session {
    Session::new(ValuationModel::consensus())
}

fn interview() -> Session {
    Session::new(ValuationModel::interview())
}
