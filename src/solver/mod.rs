//! Public entry point wiring domains, propagation, and search together.
//!
//! A solve call runs these steps in order:
//!
//! 1. Validate the range and the variables named by each constraint
//! 2. Deduplicate constraints (structural equality, first occurrence kept)
//! 3. Build one domain per meeting spanning the whole range
//! 4. Node consistency, then arc consistency (each can be disabled)
//! 5. If a domain is empty, report "no solution" without searching
//! 6. Backtracking search
//!
//! # Example
//!
//! ```
//! use calsat::{solve, Constraint, Date, DateOperator};
//!
//! let jan = |day| Date::from_ymd_opt(2023, 1, day).unwrap();
//! let constraints = [
//!     Constraint::binary(0, 1, DateOperator::Before),
//!     Constraint::unary(0, DateOperator::Equals, jan(2)),
//! ];
//!
//! let assignment = solve(2, jan(1), jan(5), constraints).unwrap();
//! assert_eq!(assignment, Some(vec![jan(2), jan(3)]));
//! ```

pub mod config;
pub mod error;


pub use config::SolverConfig;
pub use error::SolveError;

use crate::algorithms::{
    ArcConsistency, BacktrackingSearch, NodeConsistency, PropagationStats, Propagator,
    SearchOutcome, SearchStats,
};
use crate::constraints::Constraint;
use crate::domain::{DateRange, DomainStore};
use crate::Date;
use log::{debug, info};
use std::collections::HashSet;

/// Work done by each stage of a solve call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveStats {
    pub node_consistency: PropagationStats,
    pub arc_consistency: PropagationStats,
    pub search: SearchStats,
}

/// Assignment (if any) plus the statistics of the run that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    /// Date per meeting, or `None` when no solution exists.
    pub assignment: Option<Vec<Date>>,
    pub stats: SolveStats,
}

/// Solves meeting date assignments under a fixed configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Assigns a date in `[range_start, range_end]` to each of `meeting_count` meetings.
    ///
    /// Returns `Ok(None)` if no assignment satisfies every constraint.
    ///
    /// # Errors
    ///
    /// - `InvalidRange` if `range_end` precedes `range_start`
    /// - `UnknownVariable` if a constraint names a meeting `>= meeting_count`
    /// - `SelfReferential` if a binary constraint relates a meeting to itself
    /// - `NodeLimitReached` if the configured node limit is exhausted
    pub fn solve<I>(
        &self,
        meeting_count: usize,
        range_start: Date,
        range_end: Date,
        constraints: I,
    ) -> Result<Option<Vec<Date>>, SolveError>
    where
        I: IntoIterator<Item = Constraint>,
    {
        self.solve_with_report(meeting_count, range_start, range_end, constraints)
            .map(|report| report.assignment)
    }

    /// Same as [`solve`](Self::solve), also returning per-stage statistics.
    pub fn solve_with_report<I>(
        &self,
        meeting_count: usize,
        range_start: Date,
        range_end: Date,
        constraints: I,
    ) -> Result<SolveReport, SolveError>
    where
        I: IntoIterator<Item = Constraint>,
    {
        let range = DateRange::new(range_start, range_end)?;
        let constraints = deduplicate(constraints);
        validate(meeting_count, &constraints)?;

        let mut store = DomainStore::new(meeting_count, range);
        let mut stats = SolveStats::default();

        if self.config.node_consistency {
            stats.node_consistency = NodeConsistency.propagate(&mut store, &constraints);
        }
        if self.config.arc_consistency {
            stats.arc_consistency = ArcConsistency.propagate(&mut store, &constraints);
        }

        if let Some(variable) = store.first_empty() {
            info!(
                "No solution for {meeting_count} meeting(s) over {range}: domain of M{variable} emptied by propagation"
            );
            return Ok(SolveReport {
                assignment: None,
                stats,
            });
        }
        debug!(
            "{} candidate date(s) left after propagation",
            store.total_size()
        );

        let search = BacktrackingSearch::new(self.config.value_ordering, self.config.node_limit);
        let report = search.search(&constraints, &store);
        stats.search = report.stats;

        let assignment = match report.outcome {
            SearchOutcome::Solved(assignment) => Some(assignment),
            SearchOutcome::Exhausted => None,
            SearchOutcome::NodeLimitReached => {
                return Err(SolveError::NodeLimitReached {
                    limit: report.stats.nodes,
                });
            }
        };

        info!(
            "{} for {meeting_count} meeting(s) over {range} ({} constraint(s), {})",
            if assignment.is_some() {
                "Solution found"
            } else {
                "No solution"
            },
            constraints.len(),
            stats.search
        );
        Ok(SolveReport { assignment, stats })
    }
}

/// Solves with the default configuration.
///
/// See [`Solver::solve`].
pub fn solve<I>(
    meeting_count: usize,
    range_start: Date,
    range_end: Date,
    constraints: I,
) -> Result<Option<Vec<Date>>, SolveError>
where
    I: IntoIterator<Item = Constraint>,
{
    Solver::default().solve(meeting_count, range_start, range_end, constraints)
}

/// Drops structurally equal duplicates, keeping the first occurrence.
fn deduplicate<I>(constraints: I) -> Vec<Constraint>
where
    I: IntoIterator<Item = Constraint>,
{
    let mut seen = HashSet::new();
    constraints
        .into_iter()
        .filter(|constraint| seen.insert(*constraint))
        .collect()
}

fn validate(meeting_count: usize, constraints: &[Constraint]) -> Result<(), SolveError> {
    for constraint in constraints {
        if let Some(variable) = constraint.variables().find(|&v| v >= meeting_count) {
            return Err(SolveError::UnknownVariable {
                constraint: *constraint,
                variable,
                meeting_count,
            });
        }
        if let Some(binary) = constraint.as_binary() {
            if binary.left == binary.right {
                return Err(SolveError::SelfReferential {
                    constraint: *constraint,
                    variable: binary.left,
                });
            }
        }
    }
    Ok(())
}
