//! Constraint propagation and search over meeting domains.

pub mod backtracking;
pub mod propagation;

pub use backtracking::{BacktrackingSearch, SearchOutcome, SearchReport, SearchStats, ValueOrdering};
pub use propagation::{ArcConsistency, NodeConsistency, PropagationStats, Propagator};
