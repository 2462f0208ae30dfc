//! Solver configuration.

use crate::algorithms::ValueOrdering;

/// Controls which propagation passes run and how the search behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Run node consistency before search.
    pub node_consistency: bool,
    /// Run AC-3 after node consistency.
    pub arc_consistency: bool,
    /// Order in which candidate dates are tried.
    pub value_ordering: ValueOrdering,
    /// Maximum number of tentative placements; `None` searches exhaustively.
    pub node_limit: Option<u64>,
}

impl SolverConfig {
    pub fn with_node_consistency(mut self, enabled: bool) -> Self {
        self.node_consistency = enabled;
        self
    }

    pub fn with_arc_consistency(mut self, enabled: bool) -> Self {
        self.arc_consistency = enabled;
        self
    }

    pub fn with_value_ordering(mut self, ordering: ValueOrdering) -> Self {
        self.value_ordering = ordering;
        self
    }

    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Configuration that skips all propagation and searches the full range.
    pub fn search_only() -> Self {
        Self::default()
            .with_node_consistency(false)
            .with_arc_consistency(false)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            node_consistency: true,
            arc_consistency: true,
            value_ordering: ValueOrdering::Chronological,
            node_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runs_full_pipeline() {
        let cfg = SolverConfig::default();
        assert!(cfg.node_consistency);
        assert!(cfg.arc_consistency);
        assert_eq!(cfg.value_ordering, ValueOrdering::Chronological);
        assert_eq!(cfg.node_limit, None);
    }

    #[test]
    fn builders_override_fields() {
        let cfg = SolverConfig::default()
            .with_arc_consistency(false)
            .with_value_ordering(ValueOrdering::Shuffled { seed: 7 })
            .with_node_limit(50);
        assert!(cfg.node_consistency);
        assert!(!cfg.arc_consistency);
        assert_eq!(cfg.value_ordering, ValueOrdering::Shuffled { seed: 7 });
        assert_eq!(cfg.node_limit, Some(50));
    }

    #[test]
    fn search_only_disables_propagation() {
        let cfg = SolverConfig::search_only();
        assert!(!cfg.node_consistency);
        assert!(!cfg.arc_consistency);
    }
}
