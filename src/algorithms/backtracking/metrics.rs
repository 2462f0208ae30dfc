//! Counters collected during search.

use std::fmt;

/// Effort spent by one backtracking run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Tentative placements (one per candidate date tried).
    pub nodes: u64,
    /// Placements undone after failing or exhausting their subtree.
    pub backtracks: u64,
    /// Deepest assignment length reached.
    pub max_depth: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} node(s), {} backtrack(s), max depth {}",
            self.nodes, self.backtracks, self.max_depth
        )
    }
}
