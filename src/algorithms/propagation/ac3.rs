//! Arc consistency via AC-3.

use super::graph::ConstraintGraph;
use super::{PropagationStats, Propagator};
use crate::constraints::Constraint;
use crate::domain::DomainStore;
use log::{debug, trace};
use petgraph::graph::EdgeIndex;
use std::collections::VecDeque;

/// Enforces arc consistency on all binary constraints.
///
/// After propagation, every date left in a tail domain has at least one
/// supporting date in the head domain, for every arc in both directions.
/// The fixed point is unique, so the processing order only changes the
/// amount of work done. Running it again on its own output removes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArcConsistency;

impl Propagator for ArcConsistency {
    fn propagate(&self, store: &mut DomainStore, constraints: &[Constraint]) -> PropagationStats {
        let graph = ConstraintGraph::build(store.len(), constraints);
        let mut worklist = Worklist::seeded(&graph);
        let mut stats = PropagationStats::default();

        while let Some(edge) = worklist.pop() {
            let arc = graph.arc(edge);
            let removed = arc.revise(store);
            stats.revisions += 1;

            if removed > 0 {
                stats.removed += removed;
                trace!(
                    "{arc}: removed {removed}, {} left in M{}",
                    store.size(arc.tail),
                    arc.tail
                );
                for dependent in graph.arcs_into(arc.tail) {
                    worklist.push(dependent);
                }
            }
        }

        debug!(
            "{}: {} arc(s), {} revision(s), {} value(s) removed",
            self.name(),
            graph.arc_count(),
            stats.revisions,
            stats.removed
        );
        stats
    }

    fn name(&self) -> &str {
        "arc-consistency"
    }
}

/// FIFO of arcs with set semantics: an arc is pending at most once.
#[derive(Debug)]
struct Worklist {
    queue: VecDeque<EdgeIndex>,
    pending: Vec<bool>,
}

impl Worklist {
    fn seeded(graph: &ConstraintGraph) -> Self {
        let mut worklist = Self {
            queue: VecDeque::with_capacity(graph.arc_count()),
            pending: vec![false; graph.arc_count()],
        };
        for (edge, _) in graph.arcs() {
            worklist.push(edge);
        }
        worklist
    }

    fn push(&mut self, edge: EdgeIndex) {
        let slot = &mut self.pending[edge.index()];
        if !*slot {
            *slot = true;
            self.queue.push_back(edge);
        }
    }

    fn pop(&mut self) -> Option<EdgeIndex> {
        let edge = self.queue.pop_front()?;
        self.pending[edge.index()] = false;
        Some(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::DateOperator;
    use crate::domain::{DateRange, Domain};
    use crate::Date;
    use proptest::prelude::*;

    fn d(day: u32) -> Date {
        Date::from_ymd_opt(2023, 1, day).unwrap()
    }

    fn store(variables: usize, last_day: u32) -> DomainStore {
        DomainStore::new(variables, DateRange::new(d(1), d(last_day)).unwrap())
    }

    fn days(domain: &Domain) -> Vec<u32> {
        use chrono::Datelike;
        domain.iter().map(|date| date.day()).collect()
    }

    #[test]
    fn worklist_is_idempotent() {
        let constraints = [Constraint::binary(0, 1, DateOperator::Before)];
        let graph = ConstraintGraph::build(2, &constraints);
        let mut worklist = Worklist::seeded(&graph);
        let first = worklist.pop().unwrap();
        worklist.push(first);
        worklist.push(first);
        assert_eq!(worklist.queue.len(), 2);
        assert!(worklist.pop().is_some());
        assert!(worklist.pop().is_some());
        assert!(worklist.pop().is_none());
    }

    #[test]
    fn prunes_both_directions() {
        let mut store = store(2, 5);
        let constraints = [Constraint::binary(0, 1, DateOperator::Before)];
        ArcConsistency.propagate(&mut store, &constraints);
        assert_eq!(days(&store[0]), vec![1, 2, 3, 4]);
        assert_eq!(days(&store[1]), vec![2, 3, 4, 5]);
    }

    #[test]
    fn propagates_along_chains() {
        let mut store = store(3, 3);
        let constraints = [
            Constraint::binary(0, 1, DateOperator::Before),
            Constraint::binary(1, 2, DateOperator::Before),
        ];
        let stats = ArcConsistency.propagate(&mut store, &constraints);
        assert_eq!(days(&store[0]), vec![1]);
        assert_eq!(days(&store[1]), vec![2]);
        assert_eq!(days(&store[2]), vec![3]);
        assert_eq!(stats.removed, 6);
    }

    #[test]
    fn reenqueues_dependents_after_late_pruning() {
        // M2 is pinned after the M0/M1 arcs were first examined.
        let mut store = store(3, 4);
        store.replace(2, [d(2)].into_iter().collect());
        let constraints = [
            Constraint::binary(0, 1, DateOperator::Before),
            Constraint::binary(1, 2, DateOperator::BeforeOrEqual),
        ];
        ArcConsistency.propagate(&mut store, &constraints);
        assert_eq!(days(&store[1]), vec![2]);
        assert_eq!(days(&store[0]), vec![1]);
    }

    #[test]
    fn cycle_of_strict_orderings_empties_domains() {
        let mut store = store(2, 4);
        let constraints = [
            Constraint::binary(0, 1, DateOperator::Before),
            Constraint::binary(1, 0, DateOperator::Before),
        ];
        ArcConsistency.propagate(&mut store, &constraints);
        assert!(store.first_empty().is_some());
        assert_eq!(store.total_size(), 0);
    }

    #[test]
    fn not_equals_prunes_only_against_singletons() {
        let mut store = store(2, 3);
        store.replace(1, [d(2)].into_iter().collect());
        let constraints = [Constraint::binary(0, 1, DateOperator::NotEquals)];
        ArcConsistency.propagate(&mut store, &constraints);
        assert_eq!(days(&store[0]), vec![1, 3]);
        assert_eq!(days(&store[1]), vec![2]);
    }

    #[test]
    fn ignores_unary_constraints() {
        let mut store = store(1, 3);
        let constraints = [Constraint::unary(0, DateOperator::Equals, d(1))];
        let stats = ArcConsistency.propagate(&mut store, &constraints);
        assert_eq!(stats, PropagationStats::default());
        assert_eq!(store.size(0), 3);
    }

    fn arb_constraints() -> impl Strategy<Value = Vec<Constraint>> {
        proptest::collection::vec((0usize..3, 0usize..3, 0usize..6), 0..6).prop_map(|raw| {
            raw.into_iter()
                .filter(|(l, r, _)| l != r)
                .map(|(l, r, op)| Constraint::binary(l, r, DateOperator::ALL[op]))
                .collect()
        })
    }

    fn arb_store() -> impl Strategy<Value = DomainStore> {
        proptest::collection::vec(proptest::collection::btree_set(1u32..=6, 0..6), 3).prop_map(
            |sets| {
                DomainStore::from_domains(
                    sets.into_iter()
                        .map(|set| set.into_iter().map(d).collect())
                        .collect(),
                )
            },
        )
    }

    /// Every full assignment over the store's domains that satisfies all constraints.
    fn brute_force_solutions(store: &DomainStore, constraints: &[Constraint]) -> Vec<Vec<Date>> {
        let mut solutions = Vec::new();
        for a in store[0].iter() {
            for b in store[1].iter() {
                for c in store[2].iter() {
                    let candidate = vec![a, b, c];
                    if constraints
                        .iter()
                        .all(|k| k.evaluate_prefix(&candidate) == Some(true))
                    {
                        solutions.push(candidate);
                    }
                }
            }
        }
        solutions
    }

    proptest! {
        #[test]
        fn result_is_arc_consistent(constraints in arb_constraints(), mut store in arb_store()) {
            ArcConsistency.propagate(&mut store, &constraints);
            let graph = ConstraintGraph::build(store.len(), &constraints);
            prop_assert!(graph.is_arc_consistent(&store));
        }

        #[test]
        fn reaches_a_fixed_point(constraints in arb_constraints(), mut store in arb_store()) {
            ArcConsistency.propagate(&mut store, &constraints);
            let after_first = store.clone();
            let stats = ArcConsistency.propagate(&mut store, &constraints);
            prop_assert_eq!(stats.removed, 0);
            prop_assert_eq!(store, after_first);
        }

        #[test]
        fn never_removes_a_value_used_by_a_solution(
            constraints in arb_constraints(),
            mut store in arb_store(),
        ) {
            let solutions = brute_force_solutions(&store, &constraints);
            ArcConsistency.propagate(&mut store, &constraints);
            for solution in solutions {
                for (variable, date) in solution.into_iter().enumerate() {
                    prop_assert!(store[variable].contains(date));
                }
            }
        }
    }
}
