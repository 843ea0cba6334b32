//! Date filter for statement requests
//!
//! A filter bounds the transactions a statement request asks for. Callers
//! may omit it, in which case the client defaults to the three months up to
//! today. An inverted filter is rejected locally, before any request is
//! built or sent.

use crate::types::OfxError;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive date range for a statement request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionsFilter {
    /// First day of the requested range
    pub start: NaiveDate,

    /// Last day of the requested range
    pub end: NaiveDate,
}

impl TransactionsFilter {
    /// Create a filter covering `start..=end`
    ///
    /// The range is not validated here; [`TransactionsFilter::validate`]
    /// runs before a request is built.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        TransactionsFilter { start, end }
    }

    /// Default filter: the three months up to `today`, inclusive
    pub fn last_three_months(today: NaiveDate) -> Self {
        let start = today.checked_sub_months(Months::new(3)).unwrap_or(today);
        TransactionsFilter { start, end: today }
    }

    /// Reject filters whose start date is after their end date
    ///
    /// # Errors
    ///
    /// Returns [`OfxError::Validation`] for an inverted range. Runs locally;
    /// no request is built or sent for a rejected filter.
    pub fn validate(&self) -> Result<(), OfxError> {
        if self.start > self.end {
            return Err(OfxError::validation(format!(
                "start date {} is after end date {}",
                self.start, self.end
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case::ordered(date(2024, 1, 1), date(2024, 2, 1), true)]
    #[case::same_day(date(2024, 1, 1), date(2024, 1, 1), true)]
    #[case::inverted(date(2024, 2, 1), date(2024, 1, 1), false)]
    fn test_validate(#[case] start: NaiveDate, #[case] end: NaiveDate, #[case] ok: bool) {
        let result = TransactionsFilter::new(start, end).validate();
        assert_eq!(result.is_ok(), ok);
        if !ok {
            assert!(matches!(result, Err(OfxError::Validation { .. })));
        }
    }

    #[rstest]
    #[case::mid_year(date(2024, 6, 15), date(2024, 3, 15))]
    #[case::across_year(date(2024, 2, 29), date(2023, 11, 29))]
    #[case::clamped_month_end(date(2024, 5, 31), date(2024, 2, 29))]
    fn test_last_three_months(#[case] today: NaiveDate, #[case] expected_start: NaiveDate) {
        let filter = TransactionsFilter::last_three_months(today);
        assert_eq!(filter.start, expected_start);
        assert_eq!(filter.end, today);
        assert!(filter.validate().is_ok());
    }
}
