//! The set of operations a marked-day calendar exposes.
use chrono::{Datelike, Month, NaiveDate};

use crate::utils::dates::MONTHS;

/// A set of marked calendar days.
///
/// Only the year, month and day-of-month of input values identify a day: any time of day or
/// timezone carried by the input is ignored, so callers are expected to normalize their dates to
/// the day they mean (typically the UTC day) before marking it.
///
/// Days returned by range queries are sorted chronologically and each comes with no time of day,
/// which stands for the midnight starting that day.
pub trait Calendar {
    /// Mark a day. Marking a day that is already marked has no effect.
    fn mark(&mut self, day: impl Datelike);

    /// Unmark a day. Unmarking a day that is not marked has no effect.
    fn unmark(&mut self, day: impl Datelike);

    /// Check if a day is marked.
    fn is_marked(&self, day: impl Datelike) -> bool;

    /// List marked days of a month, in ascending order.
    fn month(&self, year: i32, month: Month) -> Vec<NaiveDate>;

    /// List marked days of a year, in ascending order.
    fn year(&self, year: i32) -> Vec<NaiveDate> {
        MONTHS
            .into_iter()
            .flat_map(|month| self.month(year, month))
            .collect()
    }
}
