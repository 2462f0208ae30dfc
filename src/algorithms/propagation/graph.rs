//! Directed arcs derived from binary constraints.

use crate::constraints::{BinaryConstraint, Constraint};
use crate::domain::DomainStore;
use crate::{Date, Variable};
use log::warn;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::fmt;

/// Directed propagation edge `tail → head`.
///
/// The constraint is oriented so that its left operand is the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arc {
    pub tail: Variable,
    pub head: Variable,
    pub constraint: BinaryConstraint,
}

impl Arc {
    /// Arc `left → right` for `constraint`.
    pub fn forward(constraint: BinaryConstraint) -> Self {
        Self {
            tail: constraint.left,
            head: constraint.right,
            constraint,
        }
    }

    /// Arc `right → left`, carrying the reversed constraint.
    pub fn backward(constraint: BinaryConstraint) -> Self {
        Self::forward(constraint.reversed())
    }

    /// Removes tail dates without support in the head domain.
    ///
    /// Returns the number of dates removed.
    pub fn revise(&self, store: &mut DomainStore) -> usize {
        let (Some(tail), Some(head)) = (store.get(self.tail), store.get(self.head)) else {
            return 0;
        };
        let unsupported: Vec<Date> = tail
            .iter()
            .filter(|&date| !self.constraint.operator.has_support(date, head))
            .collect();

        if let Some(tail) = store.get_mut(self.tail) {
            for date in &unsupported {
                tail.remove(*date);
            }
        }
        unsupported.len()
    }

    /// Returns true if every tail date has support in the head domain.
    pub fn is_consistent(&self, store: &DomainStore) -> bool {
        match (store.get(self.tail), store.get(self.head)) {
            (Some(tail), Some(head)) => tail
                .iter()
                .all(|date| self.constraint.operator.has_support(date, head)),
            _ => true,
        }
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(M{} -> M{}: {})", self.tail, self.head, self.constraint)
    }
}

/// Every arc of a constraint set, indexed for lookup by head variable.
///
/// Node `i` of the underlying graph is variable `i`; each binary constraint
/// contributes a forward and a backward edge.
#[derive(Debug, Clone)]
pub struct ConstraintGraph {
    graph: DiGraph<Variable, Arc>,
}

impl ConstraintGraph {
    /// Builds the arcs of every binary constraint over `variable_count` variables.
    ///
    /// Constraints naming a variable outside `0..variable_count` are skipped.
    pub fn build(variable_count: usize, constraints: &[Constraint]) -> Self {
        let binary_count = constraints.iter().filter(|c| c.arity() == 2).count();
        let mut graph = DiGraph::with_capacity(variable_count, 2 * binary_count);
        for variable in 0..variable_count {
            graph.add_node(variable);
        }

        for constraint in constraints.iter().filter_map(Constraint::as_binary) {
            if constraint.left >= variable_count || constraint.right >= variable_count {
                warn!("Skipping {constraint}: no such variable");
                continue;
            }
            let left = NodeIndex::new(constraint.left);
            let right = NodeIndex::new(constraint.right);
            graph.add_edge(left, right, Arc::forward(*constraint));
            graph.add_edge(right, left, Arc::backward(*constraint));
        }

        Self { graph }
    }

    pub fn variable_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn arc_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the arc stored under `edge`.
    ///
    /// # Panics
    ///
    /// Panics if `edge` does not belong to this graph.
    pub fn arc(&self, edge: EdgeIndex) -> &Arc {
        &self.graph[edge]
    }

    /// Iterates every arc with its edge handle.
    pub fn arcs(&self) -> impl Iterator<Item = (EdgeIndex, &Arc)> {
        self.graph
            .edge_references()
            .map(|edge| (edge.id(), edge.weight()))
    }

    /// Arcs whose head is `variable`, i.e. those whose support depends on it.
    pub fn arcs_into(&self, variable: Variable) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph
            .edges_directed(NodeIndex::new(variable), Direction::Incoming)
            .map(|edge| edge.id())
    }

    /// Returns true if every arc is consistent with `store`.
    pub fn is_arc_consistent(&self, store: &DomainStore) -> bool {
        self.graph
            .edge_weights()
            .all(|arc| arc.is_consistent(store))
    }
}
