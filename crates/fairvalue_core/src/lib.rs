//! Fair-value estimation engine
//!
//! This crate computes a fair value per share from a small table of named
//! assumptions and lets callers override them one at a time. It supports:
//! - Two presets (consensus override and CEO interview) sharing one engine
//! - Override-over-default resolution with id validation
//! - Before/after delta reporting for a single override
//! - A ±20% one-at-a-time sensitivity sweep ranked by impact
//! - Market price comparison and category review of recorded answers
//!
//! # Example
//!
//! ```ignore
//! use fairvalue_core::{Session, ValuationModel};
//!
//! let mut session = Session::new(ValuationModel::consensus());
//! assert_eq!(session.valuate()?.fair_value_per_share, 22.85);
//!
//! let report = session.update("ebitda_margin_2027", 17.0)?;
//! assert_eq!(report.new_fair_value, 31.07);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod evaluate;
pub mod session;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{ModelKind, Scope, ValuationModel};
pub use error::ValuationError;
pub use session::Session;
