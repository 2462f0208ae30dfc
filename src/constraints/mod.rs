//! Date constraints between meetings and fixed bounds.

pub mod constraint;
pub mod error;
pub mod operator;

pub use constraint::{BinaryConstraint, Constraint, UnaryConstraint};
pub use error::ConstraintError;
pub use operator::DateOperator;
