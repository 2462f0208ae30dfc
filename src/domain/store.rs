//! Per-variable domain storage.

use super::domain::Domain;
use super::range::DateRange;
use crate::Variable;
use std::fmt::Display;
use std::ops::Index;

/// One [`Domain`] per meeting, addressed by variable index.
///
/// # Invariants
///
/// - The number of domains is fixed at construction
/// - Domains only shrink after construction, except through [`replace`](Self::replace)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainStore {
    domains: Vec<Domain>,
}

impl DomainStore {
    /// Creates `variable_count` domains, each holding every day of `range`.
    pub fn new(variable_count: usize, range: DateRange) -> Self {
        let full = Domain::from_range(range);
        Self {
            domains: vec![full; variable_count],
        }
    }

    /// Creates a store from explicit domains, one per variable in order.
    pub fn from_domains(domains: Vec<Domain>) -> Self {
        Self { domains }
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn get(&self, variable: Variable) -> Option<&Domain> {
        self.domains.get(variable)
    }

    pub fn get_mut(&mut self, variable: Variable) -> Option<&mut Domain> {
        self.domains.get_mut(variable)
    }

    /// Replaces the domain of `variable`, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `variable` is out of range.
    pub fn replace(&mut self, variable: Variable, domain: Domain) -> Domain {
        std::mem::replace(&mut self.domains[variable], domain)
    }

    /// Size of the domain of `variable`, or zero for unknown variables.
    pub fn size(&self, variable: Variable) -> usize {
        self.domains.get(variable).map_or(0, Domain::len)
    }

    /// Sum of all domain sizes.
    pub fn total_size(&self) -> usize {
        self.domains.iter().map(Domain::len).sum()
    }

    /// First variable whose domain is empty, if any.
    pub fn first_empty(&self) -> Option<Variable> {
        self.domains.iter().position(Domain::is_empty)
    }

    /// Iterates `(variable, domain)` pairs in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, &Domain)> {
        self.domains.iter().enumerate()
    }
}

impl Index<Variable> for DomainStore {
    type Output = Domain;

    fn index(&self, variable: Variable) -> &Domain {
        &self.domains[variable]
    }
}

impl Display for DomainStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DomainStore {{")?;
        for (variable, domain) in self.iter() {
            writeln!(f, "  M{}: {} value(s)", variable, domain.len())?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Date;

    fn d(day: u32) -> Date {
        Date::from_ymd_opt(2023, 1, day).unwrap()
    }

    fn range() -> DateRange {
        DateRange::new(d(1), d(5)).unwrap()
    }

    #[test]
    fn new_fills_every_domain_with_the_range() {
        let store = DomainStore::new(3, range());
        assert_eq!(store.len(), 3);
        for (_, domain) in store.iter() {
            assert_eq!(domain.len(), 5);
        }
        assert_eq!(store.total_size(), 15);
        assert_eq!(store.first_empty(), None);
    }

    #[test]
    fn zero_variables() {
        let store = DomainStore::new(0, range());
        assert!(store.is_empty());
        assert_eq!(store.first_empty(), None);
        assert_eq!(store.total_size(), 0);
    }

    #[test]
    fn replace_narrows_in_place() {
        let mut store = DomainStore::new(2, range());
        let old = store.replace(1, [d(3)].into_iter().collect());
        assert_eq!(old.len(), 5);
        assert_eq!(store.size(1), 1);
        assert_eq!(store.size(0), 5);
        assert!(store[1].contains(d(3)));
    }

    #[test]
    fn first_empty_reports_lowest_index() {
        let mut store = DomainStore::new(3, range());
        store.replace(2, Domain::new());
        store.replace(1, Domain::new());
        assert_eq!(store.first_empty(), Some(1));
    }

    #[test]
    fn out_of_range_access() {
        let mut store = DomainStore::new(1, range());
        assert!(store.get(1).is_none());
        assert!(store.get_mut(1).is_none());
        assert_eq!(store.size(7), 0);
    }

    #[test]
    fn display_lists_sizes() {
        let store = DomainStore::new(1, range());
        let s = store.to_string();
        assert!(s.contains("M0: 5 value(s)"));
    }
}
