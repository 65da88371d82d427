//! Analyses layered on top of the formula.
//!
//! - `sensitivity` ranks assumptions by how far a ±20% probe moves the fair value
//! - `market` compares a fair value against the market price
//! - `review` groups recorded answers by category for display
//!
//! ```ignore
//! use fairvalue_core::analysis::sensitivity;
//! use fairvalue_core::config::ValuationModel;
//! use fairvalue_core::model::Overrides;
//!
//! let model = ValuationModel::consensus();
//! let ranked = sensitivity(&model, &Overrides::new())?;
//! assert_eq!(ranked[0].id, "ebitda_margin_2027");
//! ```

mod market;
mod review;
mod sensitivity;

pub use market::{MarketAssessment, Verdict, assess};
pub use review::{CategoryReview, Direction, ReviewEntry, review};
pub use sensitivity::{SWEEP_FRACTION, SensitivityEntry, sensitivity};
