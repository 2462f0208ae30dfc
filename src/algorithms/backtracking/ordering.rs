//! Order in which candidate dates are tried.

use crate::domain::DomainStore;
use crate::Date;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Value ordering for the search.
///
/// Determines which solution is returned when several exist. Every variant
/// is deterministic for identical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueOrdering {
    /// Earliest date first.
    #[default]
    Chronological,
    /// Latest date first.
    ReverseChronological,
    /// Pseudo-random permutation drawn from a seeded generator.
    Shuffled { seed: u64 },
}

impl ValueOrdering {
    /// Candidate lists for every variable of `store`, in variable order.
    pub fn arrange(&self, store: &DomainStore) -> Vec<Vec<Date>> {
        match *self {
            ValueOrdering::Chronological => store
                .iter()
                .map(|(_, domain)| domain.iter().collect())
                .collect(),
            ValueOrdering::ReverseChronological => store
                .iter()
                .map(|(_, domain)| domain.iter().rev().collect())
                .collect(),
            ValueOrdering::Shuffled { seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                store
                    .iter()
                    .map(|(_, domain)| {
                        let mut dates: Vec<Date> = domain.iter().collect();
                        dates.shuffle(&mut rng);
                        dates
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DateRange;

    fn store() -> DomainStore {
        let start = Date::from_ymd_opt(2023, 1, 1).unwrap();
        let end = Date::from_ymd_opt(2023, 1, 20).unwrap();
        DomainStore::new(2, DateRange::new(start, end).unwrap())
    }

    #[test]
    fn chronological_is_ascending() {
        let lists = ValueOrdering::Chronological.arrange(&store());
        assert_eq!(lists.len(), 2);
        assert!(lists[0].windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn reverse_is_descending() {
        let lists = ValueOrdering::ReverseChronological.arrange(&store());
        assert!(lists[1].windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn shuffled_is_a_reproducible_permutation() {
        let store = store();
        let a = ValueOrdering::Shuffled { seed: 42 }.arrange(&store);
        let b = ValueOrdering::Shuffled { seed: 42 }.arrange(&store);
        assert_eq!(a, b);

        let mut sorted = a[0].clone();
        sorted.sort();
        assert_eq!(sorted, store[0].iter().collect::<Vec<_>>());
    }

    #[test]
    fn default_is_chronological() {
        assert_eq!(ValueOrdering::default(), ValueOrdering::Chronological);
    }
}
