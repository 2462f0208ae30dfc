//! Domain narrowing before search.
//!
//! Two passes are provided, normally run in this order:
//!
//! 1. [`NodeConsistency`] filters each domain by the unary constraints on its variable
//! 2. [`ArcConsistency`] runs AC-3 over the binary constraints until a fixed point
//!
//! Both narrow a [`DomainStore`] in place and never fail: an emptied domain is
//! a valid outcome that the search later reports as "no solution".

mod ac3;
mod graph;
mod node;

pub use ac3::ArcConsistency;
pub use graph::{Arc, ConstraintGraph};
pub use node::NodeConsistency;

use crate::constraints::Constraint;
use crate::domain::DomainStore;
use std::ops::AddAssign;

/// A pass that removes unsupported values from domains.
pub trait Propagator {
    /// Narrows `store` in place according to `constraints`.
    fn propagate(&self, store: &mut DomainStore, constraints: &[Constraint]) -> PropagationStats;

    /// Short name used in logs.
    fn name(&self) -> &str;
}

/// Work performed by a propagation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropagationStats {
    /// Constraints (node consistency) or arcs (AC-3) examined.
    pub revisions: usize,
    /// Dates removed across all domains.
    pub removed: usize,
}

impl AddAssign for PropagationStats {
    fn add_assign(&mut self, other: Self) {
        self.revisions += other.revisions;
        self.removed += other.removed;
    }
}
