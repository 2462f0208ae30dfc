//! Unary and binary date constraints over meeting variables.

use super::operator::DateOperator;
use crate::{Date, Variable};
use std::fmt;

/// Compares one meeting's date against a fixed bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnaryConstraint {
    pub variable: Variable,
    pub operator: DateOperator,
    pub bound: Date,
}

impl UnaryConstraint {
    pub const fn new(variable: Variable, operator: DateOperator, bound: Date) -> Self {
        Self {
            variable,
            operator,
            bound,
        }
    }

    /// Returns true if `date <op> bound` holds.
    pub fn is_satisfied_by(&self, date: Date) -> bool {
        self.operator.evaluate(date, self.bound)
    }
}

impl fmt::Display for UnaryConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{} {} {}", self.variable, self.operator, self.bound)
    }
}

/// Compares the dates of two meetings.
///
/// Evaluated on the ordered pair `(date(left), date(right))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryConstraint {
    pub left: Variable,
    pub right: Variable,
    pub operator: DateOperator,
}

impl BinaryConstraint {
    pub const fn new(left: Variable, right: Variable, operator: DateOperator) -> Self {
        Self {
            left,
            right,
            operator,
        }
    }

    pub fn is_satisfied_by(&self, left: Date, right: Date) -> bool {
        self.operator.evaluate(left, right)
    }

    /// Same relation seen from the right variable.
    ///
    /// `c.is_satisfied_by(a, b) == c.reversed().is_satisfied_by(b, a)` for all dates.
    pub fn reversed(&self) -> Self {
        Self {
            left: self.right,
            right: self.left,
            operator: self.operator.reversed(),
        }
    }
}

impl fmt::Display for BinaryConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{} {} M{}", self.left, self.operator, self.right)
    }
}

/// A date constraint of arity one or two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Constraint {
    Unary(UnaryConstraint),
    Binary(BinaryConstraint),
}

impl Constraint {
    /// Creates `M<variable> <op> bound`.
    pub const fn unary(variable: Variable, operator: DateOperator, bound: Date) -> Self {
        Constraint::Unary(UnaryConstraint::new(variable, operator, bound))
    }

    /// Creates `M<left> <op> M<right>`.
    pub const fn binary(left: Variable, right: Variable, operator: DateOperator) -> Self {
        Constraint::Binary(BinaryConstraint::new(left, right, operator))
    }

    pub fn arity(&self) -> usize {
        match self {
            Constraint::Unary(_) => 1,
            Constraint::Binary(_) => 2,
        }
    }

    pub fn operator(&self) -> DateOperator {
        match self {
            Constraint::Unary(c) => c.operator,
            Constraint::Binary(c) => c.operator,
        }
    }

    /// Left operand variable, present for both arities.
    pub fn left(&self) -> Variable {
        match self {
            Constraint::Unary(c) => c.variable,
            Constraint::Binary(c) => c.left,
        }
    }

    /// Right operand variable; `None` for unary constraints.
    pub fn right(&self) -> Option<Variable> {
        match self {
            Constraint::Unary(_) => None,
            Constraint::Binary(c) => Some(c.right),
        }
    }

    /// Variables this constraint mentions.
    pub fn variables(&self) -> impl Iterator<Item = Variable> {
        std::iter::once(self.left()).chain(self.right())
    }

    /// Evaluates the operator on `(left_date, right_date)`.
    ///
    /// For unary constraints callers pass the bound as `right_date`.
    pub fn is_satisfied_by(&self, left_date: Date, right_date: Date) -> bool {
        self.operator().evaluate(left_date, right_date)
    }

    /// Checks this constraint against a partial assignment.
    ///
    /// Returns `None` while any referenced variable is still unassigned,
    /// i.e. its index is not below `assignment.len()`.
    pub fn evaluate_prefix(&self, assignment: &[Date]) -> Option<bool> {
        match self {
            Constraint::Unary(c) => assignment
                .get(c.variable)
                .map(|&date| c.is_satisfied_by(date)),
            Constraint::Binary(c) => {
                let left = *assignment.get(c.left)?;
                let right = *assignment.get(c.right)?;
                Some(c.is_satisfied_by(left, right))
            }
        }
    }

    pub fn as_unary(&self) -> Option<&UnaryConstraint> {
        match self {
            Constraint::Unary(c) => Some(c),
            Constraint::Binary(_) => None,
        }
    }

    pub fn as_binary(&self) -> Option<&BinaryConstraint> {
        match self {
            Constraint::Unary(_) => None,
            Constraint::Binary(c) => Some(c),
        }
    }
}

impl From<UnaryConstraint> for Constraint {
    fn from(c: UnaryConstraint) -> Self {
        Constraint::Unary(c)
    }
}

impl From<BinaryConstraint> for Constraint {
    fn from(c: BinaryConstraint) -> Self {
        Constraint::Binary(c)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Unary(c) => c.fmt(f),
            Constraint::Binary(c) => c.fmt(f),
        }
    }
}
