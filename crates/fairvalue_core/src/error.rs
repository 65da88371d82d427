use thiserror::Error;

/// Errors surfaced by the valuation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValuationError {
    /// The id does not name an assumption in the active table
    #[error("unknown assumption {0:?}")]
    UnknownAssumption(String),
    /// The model only allows editing answered assumptions and this one has no answer yet
    #[error("assumption {0:?} has not been answered yet")]
    NotAnswered(String),
}

pub type Result<T> = std::result::Result<T, ValuationError>;
