//! Depth-first backtracking search over pruned domains.
//!
//! The search assigns meetings strictly in index order, trying each candidate
//! date of the next variable in the configured [`ValueOrdering`]. After every
//! tentative placement, all constraints whose variables are fully assigned by
//! the current prefix are checked, not just those touching the newest
//! variable. The first full assignment found wins.
//!
//! # Module Structure
//!
//! - [`ordering`] - candidate date ordering
//! - [`metrics`] - search counters
//! - `engine` - the depth-first assignment loop

mod engine;
pub mod metrics;
pub mod ordering;

pub use metrics::SearchStats;
pub use ordering::ValueOrdering;

use crate::constraints::Constraint;
use crate::domain::DomainStore;
use crate::Date;
use engine::{SearchRun, Step};
use log::debug;

/// Terminal state of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A full assignment satisfying every constraint; index `i` is meeting `i`.
    Solved(Vec<Date>),
    /// Every branch failed: no solution exists within the domains.
    Exhausted,
    /// The node limit was hit before the search finished.
    NodeLimitReached,
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }

    /// The assignment, if one was found.
    pub fn into_assignment(self) -> Option<Vec<Date>> {
        match self {
            SearchOutcome::Solved(assignment) => Some(assignment),
            _ => None,
        }
    }
}

/// Outcome and effort of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

/// Backtracking search configured with a value ordering and optional node budget.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackingSearch {
    ordering: ValueOrdering,
    node_limit: Option<u64>,
}

impl BacktrackingSearch {
    pub fn new(ordering: ValueOrdering, node_limit: Option<u64>) -> Self {
        Self {
            ordering,
            node_limit,
        }
    }

    pub fn ordering(&self) -> ValueOrdering {
        self.ordering
    }

    pub fn node_limit(&self) -> Option<u64> {
        self.node_limit
    }

    /// Searches `store` for an assignment satisfying every constraint.
    ///
    /// Domains are only read. A store with an empty domain is reported as
    /// exhausted without exploring any node.
    pub fn search(&self, constraints: &[Constraint], store: &DomainStore) -> SearchReport {
        if let Some(variable) = store.first_empty() {
            debug!("Search skipped: domain of M{variable} is empty");
            return SearchReport {
                outcome: SearchOutcome::Exhausted,
                stats: SearchStats::default(),
            };
        }

        let candidates = self.ordering.arrange(store);
        let mut run = SearchRun::new(constraints, candidates, self.node_limit);
        let outcome = match run.extend() {
            Ok(Step::Solved) => SearchOutcome::Solved(std::mem::take(&mut run.assignment)),
            Ok(Step::Exhausted) => SearchOutcome::Exhausted,
            Err(_) => SearchOutcome::NodeLimitReached,
        };

        debug!(
            "Search {}: {}",
            match outcome {
                SearchOutcome::Solved(_) => "solved",
                SearchOutcome::Exhausted => "exhausted",
                SearchOutcome::NodeLimitReached => "hit node limit",
            },
            run.stats
        );
        SearchReport {
            outcome,
            stats: run.stats,
        }
    }
}
