//! Comparison operators between two dates.

use super::error::ConstraintError;
use crate::domain::Domain;
use crate::Date;
use std::fmt;
use std::str::FromStr;

/// Relation a constraint requires between its left and right date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateOperator {
    Equals,
    NotEquals,
    Before,
    BeforeOrEqual,
    After,
    AfterOrEqual,
}

impl DateOperator {
    pub const ALL: [DateOperator; 6] = [
        DateOperator::Equals,
        DateOperator::NotEquals,
        DateOperator::Before,
        DateOperator::BeforeOrEqual,
        DateOperator::After,
        DateOperator::AfterOrEqual,
    ];

    /// Evaluates `left <op> right`.
    pub fn evaluate(self, left: Date, right: Date) -> bool {
        match self {
            DateOperator::Equals => left == right,
            DateOperator::NotEquals => left != right,
            DateOperator::Before => left < right,
            DateOperator::BeforeOrEqual => left <= right,
            DateOperator::After => left > right,
            DateOperator::AfterOrEqual => left >= right,
        }
    }

    /// Operator with swapped operands: `a <op> b` iff `b <op.reversed()> a`.
    pub fn reversed(self) -> Self {
        match self {
            DateOperator::Equals => DateOperator::Equals,
            DateOperator::NotEquals => DateOperator::NotEquals,
            DateOperator::Before => DateOperator::After,
            DateOperator::BeforeOrEqual => DateOperator::AfterOrEqual,
            DateOperator::After => DateOperator::Before,
            DateOperator::AfterOrEqual => DateOperator::BeforeOrEqual,
        }
    }

    /// Returns true if some date in `right` satisfies `left <op> right`.
    ///
    /// Equivalent to `right.iter().any(|r| self.evaluate(left, r))`, but reads
    /// only the bounds of the ordered domain for the ordering operators.
    pub fn has_support(self, left: Date, right: &Domain) -> bool {
        match self {
            DateOperator::Equals => right.contains(left),
            DateOperator::NotEquals => match right.len() {
                0 => false,
                1 => !right.contains(left),
                _ => true,
            },
            DateOperator::Before => right.last().is_some_and(|max| left < max),
            DateOperator::BeforeOrEqual => right.last().is_some_and(|max| left <= max),
            DateOperator::After => right.first().is_some_and(|min| left > min),
            DateOperator::AfterOrEqual => right.first().is_some_and(|min| left >= min),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            DateOperator::Equals => "==",
            DateOperator::NotEquals => "!=",
            DateOperator::Before => "<",
            DateOperator::BeforeOrEqual => "<=",
            DateOperator::After => ">",
            DateOperator::AfterOrEqual => ">=",
        }
    }
}

impl fmt::Display for DateOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for DateOperator {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "==" | "=" => Ok(DateOperator::Equals),
            "!=" => Ok(DateOperator::NotEquals),
            "<" => Ok(DateOperator::Before),
            "<=" => Ok(DateOperator::BeforeOrEqual),
            ">" => Ok(DateOperator::After),
            ">=" => Ok(DateOperator::AfterOrEqual),
            other => Err(ConstraintError::UnknownOperator(other.to_string())),
        }
    }
}
