use crate::constraints::Constraint;
use crate::domain::DomainError;
use crate::Variable;
use thiserror::Error;

/// Reasons a solve call can fail.
///
/// Unsatisfiability is not an error: it is reported as `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error(transparent)]
    InvalidRange(#[from] DomainError),

    #[error("Constraint {constraint} names meeting {variable}, but only {meeting_count} meeting(s) exist")]
    UnknownVariable {
        constraint: Constraint,
        variable: Variable,
        meeting_count: usize,
    },

    #[error("Constraint {constraint} relates meeting {variable} to itself")]
    SelfReferential {
        constraint: Constraint,
        variable: Variable,
    },

    #[error("Search stopped after reaching the limit of {limit} node(s)")]
    NodeLimitReached { limit: u64 },
}

impl SolveError {
    /// Returns true for errors caused by malformed input, detected before solving.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, SolveError::NodeLimitReached { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::DateOperator;
    use crate::Date;

    #[test]
    fn invalid_range_display_is_transparent() {
        let inner = DomainError::InvertedRange {
            start: Date::from_ymd_opt(2023, 1, 5).unwrap(),
            end: Date::from_ymd_opt(2023, 1, 1).unwrap(),
        };
        let e = SolveError::from(inner.clone());
        assert_eq!(e.to_string(), inner.to_string());
        assert!(e.is_invalid_input());
    }

    #[test]
    fn unknown_variable_display() {
        let e = SolveError::UnknownVariable {
            constraint: Constraint::binary(0, 4, DateOperator::Before),
            variable: 4,
            meeting_count: 2,
        };
        assert_eq!(
            e.to_string(),
            "Constraint M0 < M4 names meeting 4, but only 2 meeting(s) exist"
        );
    }

    #[test]
    fn self_referential_display() {
        let e = SolveError::SelfReferential {
            constraint: Constraint::binary(1, 1, DateOperator::NotEquals),
            variable: 1,
        };
        assert_eq!(e.to_string(), "Constraint M1 != M1 relates meeting 1 to itself");
    }

    #[test]
    fn node_limit_is_not_invalid_input() {
        let e = SolveError::NodeLimitReached { limit: 100 };
        assert!(!e.is_invalid_input());
        assert_eq!(
            e.to_string(),
            "Search stopped after reaching the limit of 100 node(s)"
        );
    }
}
