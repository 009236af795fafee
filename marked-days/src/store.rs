use std::fmt;

use chrono::{DateTime, Datelike, Month, NaiveDate, Utc};

use compact_calendar::{CompactCalendar, CompactYear};

use crate::calendar::Calendar;
use crate::error::{Error, Result};
use crate::utils::dates::midnight_utc;

/// Marked days, stored as twelve 32-bit masks per year.
///
/// The masks of a year are allocated the first time one of its days is marked, and are kept even
/// when all of its days are unmarked later. A year that was never allocated reads as if all its
/// masks were zero.
///
/// ```
/// use marked_days::{Calendar, MarkedDays};
/// use chrono::{Month, NaiveDate};
///
/// let day = NaiveDate::from_ymd_opt(2016, 3, 15).unwrap();
/// let mut store = MarkedDays::new();
///
/// store.mark(day);
/// assert!(store.is_marked(day));
/// assert_eq!(store.month(2016, Month::March), [day]);
///
/// store.unmark(day);
/// assert!(!store.is_marked(day));
/// assert!(store.year(2016).is_empty());
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct MarkedDays {
    calendar: CompactCalendar,
}

impl MarkedDays {
    /// Create a store that does not mark any day.
    pub const fn new() -> Self {
        Self { calendar: CompactCalendar::new() }
    }

    /// Get the underlying bit-level calendar.
    pub fn as_compact(&self) -> &CompactCalendar {
        &self.calendar
    }

    /// Get the masks of a year, if any day of this year was ever marked.
    pub fn compact_year(&self, year: i32) -> Option<&CompactYear> {
        self.calendar.year(year)
    }

    /// Get the raw mask of a month: bit `i` is set if day `i + 1` is marked.
    ///
    /// ```
    /// use marked_days::{Calendar, MarkedDays};
    /// use chrono::{Month, NaiveDate};
    ///
    /// let mut store = MarkedDays::new();
    /// store.mark(NaiveDate::from_ymd_opt(2016, 3, 1).unwrap());
    /// store.mark(NaiveDate::from_ymd_opt(2016, 3, 3).unwrap());
    ///
    /// assert_eq!(store.month_mask(2016, Month::March), 0b101);
    /// assert_eq!(store.month_mask(2016, Month::April), 0);
    /// assert_eq!(store.month_mask(1999, Month::March), 0);
    /// ```
    pub fn month_mask(&self, year: i32, month: Month) -> u32 {
        self.compact_year(year)
            .map(|compact_year| compact_year.month(month.number_from_month()).bits())
            .unwrap_or(0)
    }

    // --
    // -- Validated raw input
    // --

    fn checked_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            #[cfg(feature = "log")]
            log::warn!("Rejected impossible date {year:04}-{month:02}-{day:02}");

            Error::InvalidDate { year, month, day }
        })
    }

    /// Mark a day given by its raw components, rejecting days that do not exist.
    ///
    /// ```
    /// use marked_days::{Calendar, MarkedDays};
    /// use marked_days::error::Error;
    /// use chrono::NaiveDate;
    ///
    /// let mut store = MarkedDays::new();
    /// assert!(store.try_mark_ymd(2016, 2, 29).is_ok());
    /// assert!(store.is_marked(NaiveDate::from_ymd_opt(2016, 2, 29).unwrap()));
    ///
    /// assert_eq!(
    ///     store.try_mark_ymd(2015, 2, 29),
    ///     Err(Error::InvalidDate { year: 2015, month: 2, day: 29 }),
    /// );
    ///
    /// assert!(store.compact_year(2015).is_none());
    /// ```
    pub fn try_mark_ymd(&mut self, year: i32, month: u32, day: u32) -> Result<()> {
        let date = Self::checked_ymd(year, month, day)?;
        self.mark(date);
        Ok(())
    }

    /// Unmark a day given by its raw components, rejecting days that do not exist.
    pub fn try_unmark_ymd(&mut self, year: i32, month: u32, day: u32) -> Result<()> {
        let date = Self::checked_ymd(year, month, day)?;
        self.unmark(date);
        Ok(())
    }

    /// Check if a day given by its raw components is marked, rejecting days that do not exist.
    pub fn try_is_marked_ymd(&self, year: i32, month: u32, day: u32) -> Result<bool> {
        let date = Self::checked_ymd(year, month, day)?;
        Ok(self.is_marked(date))
    }

    // --
    // -- Timestamps
    // --

    /// List marked days of a month as timestamps at midnight UTC, in ascending order.
    pub fn month_utc(&self, year: i32, month: Month) -> Vec<DateTime<Utc>> {
        self.calendar
            .iter_month(year, month.number_from_month())
            .map(midnight_utc)
            .collect()
    }

    /// List marked days of a year as timestamps at midnight UTC, in ascending order.
    pub fn year_utc(&self, year: i32) -> Vec<DateTime<Utc>> {
        self.calendar.iter_year(year).map(midnight_utc).collect()
    }

    // --
    // -- Whole store
    // --

    /// Iterate over all marked days, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.calendar.iter()
    }

    /// Count marked days.
    pub fn count(&self) -> u32 {
        self.calendar.count()
    }

    /// Get the first marked day strictly after given day, if any.
    ///
    /// ```
    /// use marked_days::{Calendar, MarkedDays};
    /// use chrono::NaiveDate;
    ///
    /// let day1 = NaiveDate::from_ymd_opt(2016, 12, 31).unwrap();
    /// let day2 = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
    ///
    /// let mut store = MarkedDays::new();
    /// store.mark(day1);
    /// store.mark(day2);
    ///
    /// assert_eq!(store.first_after(day1), Some(day2));
    /// assert_eq!(store.first_after(day2), None);
    /// ```
    pub fn first_after(&self, day: impl Datelike) -> Option<NaiveDate> {
        self.calendar.first_after(day)
    }

    /// Count consecutive marked days ending at given day, which is zero if this day is not
    /// marked. Streaks run across months and years.
    ///
    /// ```
    /// use marked_days::{Calendar, MarkedDays};
    /// use chrono::NaiveDate;
    ///
    /// let mut store = MarkedDays::new();
    /// store.mark(NaiveDate::from_ymd_opt(2016, 12, 30).unwrap());
    /// store.mark(NaiveDate::from_ymd_opt(2016, 12, 31).unwrap());
    /// store.mark(NaiveDate::from_ymd_opt(2017, 1, 1).unwrap());
    ///
    /// assert_eq!(store.streak_at(NaiveDate::from_ymd_opt(2017, 1, 1).unwrap()), 3);
    /// assert_eq!(store.streak_at(NaiveDate::from_ymd_opt(2017, 1, 2).unwrap()), 0);
    /// ```
    pub fn streak_at(&self, day: impl Datelike) -> u32 {
        let mut streak = 0;
        let mut date = NaiveDate::from_ymd_opt(day.year(), day.month(), day.day());

        while let Some(curr) = date {
            if !self.calendar.contains(curr) {
                break;
            }

            streak += 1;
            date = curr.pred_opt();
        }

        streak
    }
}

impl Calendar for MarkedDays {
    fn mark(&mut self, day: impl Datelike) {
        #[cfg(feature = "log")]
        if self.calendar.year(day.year()).is_none() {
            log::debug!("Allocating month masks for year {}", day.year());
        }

        self.calendar.insert(day);
    }

    fn unmark(&mut self, day: impl Datelike) {
        self.calendar.remove(day);
    }

    fn is_marked(&self, day: impl Datelike) -> bool {
        self.calendar.contains(day)
    }

    fn month(&self, year: i32, month: Month) -> Vec<NaiveDate> {
        self.calendar
            .iter_month(year, month.number_from_month())
            .collect()
    }

    fn year(&self, year: i32) -> Vec<NaiveDate> {
        self.calendar.iter_year(year).collect()
    }
}

impl fmt::Debug for MarkedDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
