//! Integration tests for the fairvalue valuation engine
//!
//! Tests are organized by topic:
//! - `consensus` - Consensus formula reference values and sweep ranking
//! - `interview` - Interview formula branches and answered-only policies
//! - `properties` - Engine-wide properties that hold for every preset

mod interview;
mod properties;
