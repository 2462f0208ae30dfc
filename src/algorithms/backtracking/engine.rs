//! Iterative assignment loop.

use super::metrics::SearchStats;
use crate::constraints::Constraint;
use crate::Date;
use log::trace;

/// Result of exploring one subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Solved,
    Exhausted,
}

/// The node budget ran out before the search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LimitReached;

/// State of one depth-first search.
///
/// Variables are assigned strictly in index order. `assignment` is a stack:
/// its length is the number of variables decided so far.
pub(crate) struct SearchRun {
    /// `completed_by[v]` holds the constraints whose highest variable is `v`,
    /// i.e. those that become fully assigned when `v` is placed.
    completed_by: Vec<Vec<Constraint>>,
    candidates: Vec<Vec<Date>>,
    node_limit: Option<u64>,
    pub(crate) assignment: Vec<Date>,
    pub(crate) stats: SearchStats,
}

impl SearchRun {
    pub(crate) fn new(
        constraints: &[Constraint],
        candidates: Vec<Vec<Date>>,
        node_limit: Option<u64>,
    ) -> Self {
        let capacity = candidates.len();
        let mut completed_by = vec![Vec::new(); capacity];
        for constraint in constraints {
            // Constraints naming a variable past the end are never fully assigned.
            if let Some(group) = constraint
                .variables()
                .max()
                .and_then(|last| completed_by.get_mut(last))
            {
                group.push(*constraint);
            }
        }
        Self {
            completed_by,
            candidates,
            node_limit,
            assignment: Vec::with_capacity(capacity),
            stats: SearchStats::default(),
        }
    }

    /// Extends the current prefix to a full assignment, or exhausts the subtree.
    ///
    /// Depth-first with an explicit stack of candidate cursors, so the depth
    /// of the search is not bounded by the call stack. On `Solved`,
    /// `assignment` holds the solution. On `Exhausted` it is back to the
    /// length it had on entry.
    pub(crate) fn extend(&mut self) -> Result<Step, LimitReached> {
        let base = self.assignment.len();
        if base == self.candidates.len() {
            return Ok(Step::Solved);
        }

        // cursors[i] is the next candidate to try for variable base + i.
        let mut cursors = vec![0usize];
        while let Some(&index) = cursors.last() {
            let level = cursors.len() - 1;
            let depth = base + level;

            if index == self.candidates[depth].len() {
                cursors.pop();
                if level > 0 {
                    self.undo(depth - 1);
                }
                continue;
            }

            if self
                .node_limit
                .is_some_and(|limit| self.stats.nodes >= limit)
            {
                return Err(LimitReached);
            }

            cursors[level] += 1;
            let date = self.candidates[depth][index];
            self.stats.nodes += 1;
            self.assignment.push(date);
            self.stats.max_depth = self.stats.max_depth.max(self.assignment.len());

            if !self.prefix_consistent() {
                self.undo(depth);
            } else if self.assignment.len() == self.candidates.len() {
                return Ok(Step::Solved);
            } else {
                cursors.push(0);
            }
        }

        Ok(Step::Exhausted)
    }

    /// Pops the date placed for `depth`.
    fn undo(&mut self, depth: usize) {
        if let Some(date) = self.assignment.pop() {
            self.stats.backtracks += 1;
            trace!("Backtrack: M{depth} != {date}");
        }
    }

    /// Checks every constraint whose variables are all assigned.
    ///
    /// Constraints completed by earlier variables already held for the
    /// unchanged rest of the prefix, so only those completed by the newest
    /// variable are evaluated.
    fn prefix_consistent(&self) -> bool {
        let Some(newest) = self.assignment.len().checked_sub(1) else {
            return true;
        };
        self.completed_by[newest]
            .iter()
            .all(|constraint| constraint.evaluate_prefix(&self.assignment) == Some(true))
    }
}
