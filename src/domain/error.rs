use crate::Date;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Date range is inverted: end {end} is before start {start}")]
    InvertedRange { start: Date, end: Date },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_range_display() {
        let e = DomainError::InvertedRange {
            start: Date::from_ymd_opt(2023, 1, 5).unwrap(),
            end: Date::from_ymd_opt(2023, 1, 1).unwrap(),
        };
        assert_eq!(
            e.to_string(),
            "Date range is inverted: end 2023-01-01 is before start 2023-01-05"
        );
    }
}
