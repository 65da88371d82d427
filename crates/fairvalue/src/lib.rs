//! Terminal front end for the fair-value engine
//!
//! Owns everything that touches the outside world: the menu, the data
//! directory, the log file, and colored output. All valuation logic lives in
//! `fairvalue_core`.

pub mod app;
pub mod data;
pub mod demo;
pub mod logging;
pub mod prompt;
pub mod report;
pub mod util;

#[cfg(test)]
mod tests;

pub use app::{App, Exit, open_session};
pub use logging::init_logging;
