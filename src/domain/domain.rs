//! Ordered set of candidate dates for one meeting.

use super::range::DateRange;
use crate::Date;
use std::collections::BTreeSet;
use std::fmt;

/// Candidate dates still possible for a variable.
///
/// Backed by a `BTreeSet`, so iteration is always chronological and the
/// search enumerates values in a reproducible order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain(BTreeSet<Date>);

impl Domain {
    /// Creates an empty domain.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Creates a domain holding every day of `range`.
    pub fn from_range(range: DateRange) -> Self {
        range.days().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, date: Date) -> bool {
        self.0.contains(&date)
    }

    /// Adds a date; returns false if it was already present.
    pub fn insert(&mut self, date: Date) -> bool {
        self.0.insert(date)
    }

    /// Removes a date; returns true if it was present.
    pub fn remove(&mut self, date: Date) -> bool {
        self.0.remove(&date)
    }

    /// Keeps only the dates matching `keep`, returning how many were removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(Date) -> bool,
    {
        let before = self.0.len();
        self.0.retain(|date| keep(*date));
        before - self.0.len()
    }

    /// Earliest remaining date.
    pub fn first(&self) -> Option<Date> {
        self.0.first().copied()
    }

    /// Latest remaining date.
    pub fn last(&self) -> Option<Date> {
        self.0.last().copied()
    }

    /// Iterates the dates in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Date> + ExactSizeIterator + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Date> for Domain {
    fn from_iter<I: IntoIterator<Item = Date>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<DateRange> for Domain {
    fn from(range: DateRange) -> Self {
        Domain::from_range(range)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, date) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", date)?;
        }
        write!(f, "}}")
    }
}
