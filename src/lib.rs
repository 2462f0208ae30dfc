//! calsat - calendar constraint satisfaction for meeting dates
//!
//! Assigns one date to each of N meetings drawn from a shared inclusive date
//! range so that every unary (meeting vs. fixed date) and binary (meeting vs.
//! meeting) constraint holds, or reports that no such assignment exists.
//!
//! Domains are narrowed by node consistency and AC-3 arc consistency before a
//! backtracking search assigns meetings in index order.

pub mod algorithms;
pub mod constraints;
pub mod domain;
pub mod solver;

pub use constraints::{BinaryConstraint, Constraint, DateOperator, UnaryConstraint};
pub use domain::{DateRange, Domain, DomainStore};
pub use solver::{solve, SolveError, SolveReport, SolveStats, Solver, SolverConfig};

/// Calendar date a meeting is assigned to.
pub type Date = chrono::NaiveDate;

/// Index identifying one meeting, `0..N-1`.
pub type Variable = usize;
