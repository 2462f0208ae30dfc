//! Node consistency: unary constraints only.

use super::{PropagationStats, Propagator};
use crate::constraints::Constraint;
use crate::domain::DomainStore;
use log::{debug, trace, warn};

/// Removes every date that violates a unary constraint on its variable.
///
/// Binary constraints are ignored. Processing order does not matter since
/// each unary constraint only filters its own variable's domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeConsistency;

impl Propagator for NodeConsistency {
    fn propagate(&self, store: &mut DomainStore, constraints: &[Constraint]) -> PropagationStats {
        let mut stats = PropagationStats::default();

        for constraint in constraints.iter().filter_map(Constraint::as_unary) {
            let Some(domain) = store.get_mut(constraint.variable) else {
                warn!("Skipping {constraint}: no such variable");
                continue;
            };
            let removed = domain.retain(|date| constraint.is_satisfied_by(date));
            stats.revisions += 1;
            stats.removed += removed;
            trace!(
                "{constraint}: removed {removed}, {} left",
                domain.len()
            );
        }

        debug!(
            "{}: {} unary constraint(s), {} value(s) removed",
            self.name(),
            stats.revisions,
            stats.removed
        );
        stats
    }

    fn name(&self) -> &str {
        "node-consistency"
    }
}
