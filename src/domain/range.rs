//! Inclusive calendar date ranges.

use super::error::DomainError;
use crate::Date;
use std::fmt;

/// Inclusive range `[start, end]` of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDateRange"))]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Creates a range; fails if `end` precedes `start`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range holding exactly one day.
    pub const fn single(day: Date) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub const fn start(&self) -> Date {
        self.start
    }

    pub const fn end(&self) -> Date {
        self.end
    }

    /// Number of days in the range (never zero).
    pub fn len(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day from `start` to `end`, inclusive and ascending.
    pub fn days(&self) -> impl Iterator<Item = Date> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// Unchecked wire form; deserialization goes through [`DateRange::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDateRange {
    start: Date,
    end: Date,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDateRange> for DateRange {
    type Error = DomainError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
