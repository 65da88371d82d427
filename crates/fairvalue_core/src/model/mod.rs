mod assumption;
mod overrides;
mod results;

pub use assumption::{Assumption, AssumptionTable, Perturbation, Unit};
pub use overrides::Overrides;
pub use results::{HIGH_IMPACT, HUGE_IMPACT, ImpactLevel, Metric, UpdateReport, Valuation};
