use thiserror::Error;

/// Errors raised while building constraint values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Unknown date operator: {0:?}")]
    UnknownOperator(String),
}
