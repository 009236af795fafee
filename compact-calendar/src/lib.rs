#![doc = include_str!("../README.md")]

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{Datelike, NaiveDate};

/// A compact representation of included days, using u32-based bit arrays for each month of the
/// years that have ever included a day.
///
/// Years are allocated lazily on first insertion and are never released afterwards: a year that
/// was emptied by [`CompactCalendar::remove`] stays allocated with all its months set to zero. An
/// absent year and an allocated but empty year behave identically for every query, including
/// comparisons and hashing.
///
/// ```
/// use compact_calendar::CompactCalendar;
/// use chrono::NaiveDate;
///
/// let mut cal = CompactCalendar::new();
/// cal.insert(NaiveDate::from_ymd_opt(2013, 11, 3).unwrap());
/// cal.remove(NaiveDate::from_ymd_opt(2013, 11, 3).unwrap());
///
/// assert!(cal.year(2013).is_some());
/// assert_eq!(cal, CompactCalendar::new());
/// ```
#[derive(Clone, Default)]
pub struct CompactCalendar {
    calendar: BTreeMap<i32, CompactYear>,
}

impl CompactCalendar {
    /// Create a new calendar that does not include any day.
    ///
    /// ```
    /// use compact_calendar::CompactCalendar;
    /// use chrono::NaiveDate;
    ///
    /// let cal = CompactCalendar::new();
    /// assert!(!cal.contains(NaiveDate::from_ymd_opt(2013, 11, 3).unwrap()));
    /// assert_eq!(cal.count(), 0);
    /// ```
    pub const fn new() -> Self {
        Self { calendar: BTreeMap::new() }
    }

    /// Get a reference to a year of this calendar, if it was ever allocated.
    ///
    /// ```
    /// use compact_calendar::CompactCalendar;
    /// use chrono::NaiveDate;
    ///
    /// let mut cal = CompactCalendar::new();
    /// cal.insert(NaiveDate::from_ymd_opt(2013, 11, 3).unwrap());
    ///
    /// assert!(cal.year(2013).unwrap().contains(11, 3));
    /// assert!(cal.year(2014).is_none());
    /// ```
    pub fn year(&self, year: i32) -> Option<&CompactYear> {
        self.calendar.get(&year)
    }

    /// Allocated years that include at least one day.
    fn non_empty_years(&self) -> impl Iterator<Item = (&i32, &CompactYear)> + '_ {
        self.calendar.iter().filter(|(_, year)| !year.is_empty())
    }

    /// Get a mutable reference to a year of this calendar, allocating an empty year first if
    /// needed.
    ///
    /// ```
    /// use compact_calendar::CompactCalendar;
    /// use chrono::NaiveDate;
    ///
    /// let mut cal = CompactCalendar::new();
    /// assert!(cal.year(2022).is_none());
    ///
    /// cal.year_entry(2022).insert(3, 5);
    /// assert!(cal.contains(NaiveDate::from_ymd_opt(2022, 3, 5).unwrap()));
    /// ```
    pub fn year_entry(&mut self, year: i32) -> &mut CompactYear {
        self.calendar.entry(year).or_default()
    }

    /// Get a reference to the year containing given date, if it was ever allocated.
    ///
    /// ```
    /// use compact_calendar::CompactCalendar;
    /// use chrono::NaiveDate;
    ///
    /// let day1 = NaiveDate::from_ymd_opt(2013, 11, 3).unwrap();
    /// let day2 = NaiveDate::from_ymd_opt(2055, 3, 5).unwrap();
    ///
    /// let mut cal = CompactCalendar::new();
    /// cal.insert(day1);
    ///
    /// assert!(cal.year_for(day1).unwrap().contains(11, 3));
    /// assert!(cal.year_for(day2).is_none());
    /// ```
    pub fn year_for(&self, date: impl Datelike) -> Option<&CompactYear> {
        self.year(date.year())
    }

    /// Get a mutable reference to the year containing given date, if it was ever allocated.
    ///
    /// ```
    /// use compact_calendar::CompactCalendar;
    /// use chrono::NaiveDate;
    ///
    /// let day1 = NaiveDate::from_ymd_opt(2013, 11, 3).unwrap();
    /// let day2 = NaiveDate::from_ymd_opt(2013, 3, 5).unwrap();
    /// let day3 = NaiveDate::from_ymd_opt(2055, 7, 5).unwrap();
    ///
    /// let mut cal = CompactCalendar::new();
    /// assert!(cal.year_for_mut(day1).is_none());
    ///
    /// cal.insert(day1);
    /// cal.year_for_mut(day1).unwrap().insert(3, 5);
    /// assert!(cal.contains(day2));
    /// assert!(cal.year_for_mut(day3).is_none());
    /// ```
    pub fn year_for_mut(&mut self, date: impl Datelike) -> Option<&mut CompactYear> {
        self.calendar.get_mut(&date.year())
    }

    /// Include a day in this calendar. Return true if the day was not already included.
    ///
    /// ```
    /// use compact_calendar::CompactCalendar;
    /// use chrono::NaiveDate;
    ///
    /// let day1 = NaiveDate::from_ymd_opt(2013, 11, 3).unwrap();
    /// let day2 = NaiveDate::from_ymd_opt(2022, 3, 5).unwrap();
    ///
    /// let mut cal = CompactCalendar::new();
    /// assert!(cal.insert(day1));
    /// assert!(!cal.insert(day1));
    /// assert!(cal.insert(day2));
    /// assert_eq!(cal.count(), 2);
    /// ```
    pub fn insert(&mut self, date: impl Datelike) -> bool {
        self.year_entry(date.year()).insert(date.month(), date.day())
    }

    /// Exclude a day from this calendar. Return true if the day was included before.
    ///
    /// The year slot of the day is kept allocated even if it does not include any day anymore.
    ///
    /// ```
    /// use compact_calendar::CompactCalendar;
    /// use chrono::NaiveDate;
    ///
    /// let day1 = NaiveDate::from_ymd_opt(2013, 11, 3).unwrap();
    /// let day2 = NaiveDate::from_ymd_opt(2022, 3, 5).unwrap();
    ///
    /// let mut cal = CompactCalendar::new();
    /// cal.insert(day1);
    ///
    /// assert!(cal.remove(day1));
    /// assert!(!cal.remove(day1));
    /// assert!(!cal.remove(day2));
    /// assert!(cal.year(2013).unwrap().is_empty());
    /// assert!(cal.year(2022).is_none());
    /// ```
    pub fn remove(&mut self, date: impl Datelike) -> bool {
        let (month, day) = (date.month(), date.day());

        self.year_for_mut(date)
            .map(|year| year.remove(month, day))
            .unwrap_or(false)
    }

    /// Check if this calendar includes the given day.
    ///
    /// ```
    /// use compact_calendar::CompactCalendar;
    /// use chrono::NaiveDate;
    ///
    /// let day1 = NaiveDate::from_ymd_opt(2013, 11, 3).unwrap();
    /// let day2 = NaiveDate::from_ymd_opt(2022, 3, 5).unwrap();
    /// let day3 = NaiveDate::from_ymd_opt(2022, 8, 12).unwrap();
    ///
    /// let mut cal = CompactCalendar::new();
    /// cal.insert(day1);
    /// cal.insert(day2);
    ///
    /// assert!(cal.contains(day1));
    /// assert!(cal.contains(day2));
    /// assert!(!cal.contains(day3));
    /// ```
    pub fn contains(&self, date: impl Datelike) -> bool {
        if let Some(year) = self.year(date.year()) {
            year.contains(date.month(), date.day())
        } else {
            false
        }
    }

    /// Iterate over the days included in given month of given year.
    ///
    /// ```
    /// use compact_calendar::CompactCalendar;
    /// use chrono::NaiveDate;
    ///
    /// let day1 = NaiveDate::from_ymd_opt(2022, 3, 17).unwrap();
    /// let day2 = NaiveDate::from_ymd_opt(2022, 3, 5).unwrap();
    /// let day3 = NaiveDate::from_ymd_opt(2022, 4, 1).unwrap();
    ///
    /// let mut cal = CompactCalendar::new();
    /// cal.insert(day1);
    /// cal.insert(day2);
    /// cal.insert(day3);
    ///
    /// let days: Vec<_> = cal.iter_month(2022, 3).collect();
    /// assert_eq!(days, [day2, day1]);
    /// assert_eq!(cal.iter_month(2023, 3).count(), 0);
    /// ```
    pub fn iter_month(&self, year: i32, month: u32) -> impl Iterator<Item = NaiveDate> + '_ {
        assert!((1..=12).contains(&month));

        self.year(year)
            .into_iter()
            .flat_map(move |compact_year| compact_year.month(month).iter())
            .filter_map(move |day| NaiveDate::from_ymd_opt(year, month, day))
    }

    /// Iterate over the days included in given year.
    ///
    /// ```
    /// use compact_calendar::CompactCalendar;
    /// use chrono::NaiveDate;
    ///
    /// let day1 = NaiveDate::from_ymd_opt(2022, 8, 12).unwrap();
    /// let day2 = NaiveDate::from_ymd_opt(2022, 3, 5).unwrap();
    /// let day3 = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    ///
    /// let mut cal = CompactCalendar::new();
    /// cal.insert(day1);
    /// cal.insert(day2);
    /// cal.insert(day3);
    ///
    /// let days: Vec<_> = cal.iter_year(2022).collect();
    /// assert_eq!(days, [day2, day1]);
    /// assert_eq!(cal.iter_year(2021).count(), 0);
    /// ```
    pub fn iter_year(&self, year: i32) -> impl Iterator<Item = NaiveDate> + '_ {
        self.year(year)
            .into_iter()
            .flat_map(move |compact_year| ymd_dates(year, compact_year))
    }

    /// Iterate over the days included in this calendar.
    ///
    /// ```
    /// use compact_calendar::CompactCalendar;
    /// use chrono::NaiveDate;
    ///
    /// let day1 = NaiveDate::from_ymd_opt(2013, 11, 3).unwrap();
    /// let day2 = NaiveDate::from_ymd_opt(2022, 3, 5).unwrap();
    /// let day3 = NaiveDate::from_ymd_opt(2022, 8, 12).unwrap();
    ///
    /// let mut cal = CompactCalendar::new();
    /// cal.insert(day3);
    /// cal.insert(day1);
    /// cal.insert(day2);
    ///
    /// let days: Vec<_> = cal.iter().collect();
    /// assert_eq!(days, [day1, day2, day3])
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.calendar
            .iter()
            .flat_map(|(&year_i, year)| ymd_dates(year_i, year))
    }

    /// Get the first day included in this calendar that follows the input day, if such a day
    /// exists.
    ///
    /// ```
    /// use compact_calendar::CompactCalendar;
    /// use chrono::NaiveDate;
    ///
    /// let day0 = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
    /// let day1 = NaiveDate::from_ymd_opt(2013, 11, 3).unwrap();
    /// let day2 = NaiveDate::from_ymd_opt(2022, 3, 5).unwrap();
    /// let day3 = NaiveDate::from_ymd_opt(2022, 8, 12).unwrap();
    ///
    /// let mut cal = CompactCalendar::new();
    /// cal.insert(day1);
    /// cal.insert(day2);
    /// cal.insert(day3);
    ///
    /// assert_eq!(cal.first_after(day0), Some(day1));
    /// assert_eq!(cal.first_after(day2), Some(day3));
    /// assert_eq!(cal.first_after(day3), None);
    ///
    /// // February 30th can only be inserted through raw components, and is never returned
    /// cal.year_entry(2022).insert(2, 30);
    /// assert_eq!(cal.first_after(NaiveDate::from_ymd_opt(2022, 2, 1).unwrap()), Some(day2));
    /// ```
    pub fn first_after(&self, date: impl Datelike) -> Option<NaiveDate> {
        let from_first_year = self.year(date.year()).and_then(|year| {
            let (mut month, mut day) = (date.month(), date.day());

            // Days that don't exist in their month are skipped
            loop {
                (month, day) = year.first_after(month, day)?;

                if let Some(res) = NaiveDate::from_ymd_opt(date.year(), month, day) {
                    return Some(res);
                }
            }
        });

        from_first_year.or_else(|| {
            let next_year = date.year().checked_add(1)?;

            self.calendar
                .range(next_year..)
                .find_map(|(&year_i, year)| ymd_dates(year_i, year).next())
        })
    }

    /// Count number of days included for this calendar.
    ///
    /// ```
    /// use compact_calendar::CompactCalendar;
    /// use chrono::NaiveDate;
    ///
    /// let mut cal = CompactCalendar::new();
    /// cal.insert(NaiveDate::from_ymd_opt(2022, 8, 12).unwrap());
    /// cal.insert(NaiveDate::from_ymd_opt(2022, 3, 5).unwrap());
    /// cal.insert(NaiveDate::from_ymd_opt(1789, 7, 14).unwrap());
    /// assert_eq!(cal.count(), 3);
    /// ```
    pub fn count(&self) -> u32 {
        self.calendar.values().map(CompactYear::count).sum()
    }
}

/// Build the dates included in a year, skipping days that do not exist in their month.
fn ymd_dates(year_i: i32, year: &CompactYear) -> impl Iterator<Item = NaiveDate> + '_ {
    year.iter()
        .filter_map(move |(month, day)| NaiveDate::from_ymd_opt(year_i, month, day))
}

impl PartialEq for CompactCalendar {
    fn eq(&self, other: &Self) -> bool {
        self.non_empty_years().eq(other.non_empty_years())
    }
}

impl Eq for CompactCalendar {}

impl PartialOrd for CompactCalendar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CompactCalendar {
    fn cmp(&self, other: &Self) -> Ordering {
        self.non_empty_years().cmp(other.non_empty_years())
    }
}

impl Hash for CompactCalendar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for (year_i, year) in self.non_empty_years() {
            year_i.hash(state);
            year.hash(state);
        }
    }
}

impl fmt::Debug for CompactCalendar {
    /// ```
    /// use compact_calendar::CompactCalendar;
    /// use chrono::NaiveDate;
    ///
    /// let mut cal = CompactCalendar::new();
    /// cal.insert(NaiveDate::from_ymd_opt(2022, 8, 12).unwrap());
    /// cal.insert(NaiveDate::from_ymd_opt(2020, 3, 5).unwrap());
    ///
    /// assert_eq!(
    ///     format!("{cal:?}"),
    ///     "CompactCalendar { years: [2020, 2022], calendar: {2020-03-05, 2022-08-12} }",
    /// );
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugCalendar<'a>(&'a CompactCalendar);

        impl fmt::Debug for DebugCalendar<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_set().entries(self.0.iter()).finish()
            }
        }

        let years: Vec<_> = self.calendar.keys().collect();

        f.debug_struct("CompactCalendar")
            .field("years", &years)
            .field("calendar", &DebugCalendar(self))
            .finish()
    }
}

/// A compact representation of included days for a year, using a collection of u32-based bit
/// array.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CompactYear([CompactMonth; 12]);

impl CompactYear {
    /// Create a new year that does not include any day.
    ///
    /// ```
    /// use compact_calendar::CompactYear;
    ///
    /// let year = CompactYear::new();
    /// assert_eq!(year.count(), 0);
    /// ```
    pub const fn new() -> Self {
        Self([CompactMonth::new(); 12])
    }

    /// Get the bit array of a month of this year.
    ///
    /// ```
    /// use compact_calendar::CompactYear;
    ///
    /// let mut year = CompactYear::new();
    /// year.insert(3, 1);
    /// year.insert(3, 3);
    ///
    /// assert_eq!(year.month(3).bits(), 0b101);
    /// assert_eq!(year.month(4).bits(), 0);
    /// ```
    pub fn month(&self, month: u32) -> CompactMonth {
        assert!((1..=12).contains(&month));
        self.0[(month - 1) as usize]
    }

    /// Include a day in this year. Return true if the day was not already included.
    ///
    /// ```
    /// use compact_calendar::CompactYear;
    ///
    /// let mut year = CompactYear::new();
    /// assert!(year.insert(11, 3));
    /// assert!(!year.insert(11, 3));
    /// assert!(year.insert(1, 25));
    /// assert_eq!(year.count(), 2);
    /// ```
    pub fn insert(&mut self, month: u32, day: u32) -> bool {
        assert!((1..=12).contains(&month));
        assert!((1..=31).contains(&day));
        self.0[(month - 1) as usize].insert(day)
    }

    /// Exclude a day from this year. Return true if the day was included before.
    ///
    /// ```
    /// use compact_calendar::CompactYear;
    ///
    /// let mut year = CompactYear::new();
    /// year.insert(11, 3);
    /// year.insert(1, 25);
    ///
    /// assert!(year.remove(11, 3));
    /// assert!(!year.remove(11, 3));
    /// assert_eq!(year.count(), 1);
    /// ```
    pub fn remove(&mut self, month: u32, day: u32) -> bool {
        assert!((1..=12).contains(&month));
        assert!((1..=31).contains(&day));
        self.0[(month - 1) as usize].remove(day)
    }

    /// Check if this year includes the given day.
    ///
    /// ```
    /// use compact_calendar::CompactYear;
    ///
    /// let mut year = CompactYear::new();
    /// year.insert(3, 1);
    /// year.insert(9, 5);
    ///
    /// assert!(year.contains(3, 1));
    /// assert!(year.contains(9, 5));
    /// assert!(!year.contains(7, 14));
    /// ```
    pub fn contains(&self, month: u32, day: u32) -> bool {
        assert!((1..=12).contains(&month));
        assert!((1..=31).contains(&day));
        self.0[(month - 1) as usize].contains(day)
    }

    /// Check if this year does not include any day.
    ///
    /// ```
    /// use compact_calendar::CompactYear;
    ///
    /// let mut year = CompactYear::new();
    /// assert!(year.is_empty());
    ///
    /// year.insert(6, 30);
    /// assert!(!year.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|month| month.is_empty())
    }

    /// Iterate over the days included in this year.
    ///
    /// ```
    /// use compact_calendar::CompactYear;
    ///
    /// let mut year = CompactYear::new();
    /// year.insert(9, 5);
    /// year.insert(3, 1);
    ///
    /// let days: Vec<_> = year.iter().collect();
    /// assert_eq!(days, [(3, 1), (9, 5)])
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        ((1..=12).zip(&self.0))
            .flat_map(|(month_i, month)| month.iter().map(move |day| (month_i, day)))
    }

    /// Get the first day included in this year if it is not empty.
    ///
    /// ```
    /// use compact_calendar::CompactYear;
    ///
    /// let mut year = CompactYear::new();
    /// assert_eq!(year.first(), None);
    ///
    /// year.insert(12, 31);
    /// assert_eq!(year.first(), Some((12, 31)));
    ///
    /// year.insert(5, 8);
    /// assert_eq!(year.first(), Some((5, 8)));
    /// ```
    pub fn first(&self) -> Option<(u32, u32)> {
        self.0.iter().enumerate().find_map(|(i, month)| {
            let res_month = (i + 1) as u32;
            Some((res_month, month.first()?))
        })
    }

    /// Get the first day included in this year that follows the input day, if such a day exists.
    ///
    /// ```
    /// use compact_calendar::CompactYear;
    ///
    /// let mut year = CompactYear::new();
    /// year.insert(3, 15);
    /// year.insert(10, 9);
    /// year.insert(2, 7);
    ///
    /// assert_eq!(year.first_after(2, 2), Some((2, 7)));
    /// assert_eq!(year.first_after(2, 7), Some((3, 15)));
    /// assert_eq!(year.first_after(11, 1), None);
    /// ```
    pub fn first_after(&self, month: u32, day: u32) -> Option<(u32, u32)> {
        assert!((1..=12).contains(&month));
        assert!((1..=31).contains(&day));
        let month0: usize = (month - 1) as usize;

        if let Some(res) = self.0[month0].first_after(day) {
            Some((month, res))
        } else {
            self.0[month0 + 1..]
                .iter()
                .enumerate()
                .find_map(|(i, month)| {
                    let res_month = (i + month0 + 2) as u32;
                    Some((res_month, month.first()?))
                })
        }
    }

    /// Count number of days included for this year.
    ///
    /// ```
    /// use compact_calendar::CompactYear;
    ///
    /// let mut year = CompactYear::new();
    /// year.insert(11, 3);
    /// year.insert(4, 28);
    /// assert_eq!(year.count(), 2);
    /// ```
    pub fn count(&self) -> u32 {
        self.0.iter().copied().map(CompactMonth::count).sum()
    }
}

impl fmt::Debug for CompactYear {
    /// ```
    /// use compact_calendar::CompactYear;
    ///
    /// let mut year = CompactYear::new();
    /// year.insert(11, 3);
    /// year.insert(4, 28);
    /// assert_eq!(format!("{year:?}"), "{04-28, 11-03}");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugMonthDay {
            month: u32,
            day: u32,
        }

        impl fmt::Debug for DebugMonthDay {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:02}-{:02}", self.month, self.day)
            }
        }

        f.debug_set()
            .entries(self.iter().map(|(month, day)| DebugMonthDay { month, day }))
            .finish()
    }
}

/// A compact representation of included days for a month, using a u32-based bit array.
///
/// Bit `i` is set when day `i + 1` is included, so only the 31 lowest bits are ever used.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CompactMonth(u32);

impl CompactMonth {
    /// Create a new month that does not include any day.
    ///
    /// ```
    /// use compact_calendar::CompactMonth;
    ///
    /// let month = CompactMonth::new();
    /// assert_eq!(month.count(), 0);
    /// ```
    pub const fn new() -> Self {
        Self(0)
    }

    /// Get the raw bit array of this month.
    ///
    /// ```
    /// use compact_calendar::CompactMonth;
    ///
    /// let mut month = CompactMonth::new();
    ///
    /// for day in 1..=31 {
    ///     month.insert(day);
    /// }
    ///
    /// assert_eq!(month.bits(), 0x7fff_ffff);
    /// month.remove(15);
    /// assert_eq!(month.bits(), 0x7fff_bfff);
    /// ```
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Include a day in this month. Return true if the day was not already included.
    ///
    /// ```
    /// use compact_calendar::CompactMonth;
    ///
    /// let mut month = CompactMonth::new();
    /// assert!(month.insert(2));
    /// assert!(!month.insert(2));
    /// assert!(month.insert(19));
    /// assert_eq!(month.count(), 2);
    /// ```
    pub fn insert(&mut self, day: u32) -> bool {
        assert!((1..=31).contains(&day));
        let bit = 1 << (day - 1);
        let inserted = self.0 & bit == 0;
        self.0 |= bit;
        inserted
    }

    /// Exclude a day from this month. Return true if the day was included before.
    ///
    /// ```
    /// use compact_calendar::CompactMonth;
    ///
    /// let mut month = CompactMonth::new();
    /// month.insert(2);
    /// month.insert(19);
    ///
    /// assert!(month.remove(2));
    /// assert!(!month.remove(2));
    /// assert!(!month.remove(30));
    /// assert_eq!(month.count(), 1);
    /// ```
    pub fn remove(&mut self, day: u32) -> bool {
        assert!((1..=31).contains(&day));
        let bit = 1 << (day - 1);
        let removed = self.0 & bit != 0;
        self.0 &= !bit;
        removed
    }

    /// Check if this month includes the given day.
    ///
    /// ```
    /// use compact_calendar::CompactMonth;
    ///
    /// let mut month = CompactMonth::new();
    /// month.insert(1);
    /// month.insert(18);
    ///
    /// assert!(month.contains(1));
    /// assert!(month.contains(18));
    /// assert!(!month.contains(5));
    /// ```
    pub fn contains(self, day: u32) -> bool {
        assert!((1..=31).contains(&day));
        self.0 & (1 << (day - 1)) != 0
    }

    /// Check if this month does not include any day.
    ///
    /// ```
    /// use compact_calendar::CompactMonth;
    ///
    /// let mut month = CompactMonth::new();
    /// assert!(month.is_empty());
    ///
    /// month.insert(9);
    /// assert!(!month.is_empty());
    /// ```
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the days included in this month, in ascending order.
    ///
    /// Only bit positions up to the highest set bit are visited, an empty month does not visit
    /// any.
    ///
    /// ```
    /// use compact_calendar::CompactMonth;
    ///
    /// let mut month = CompactMonth::new();
    /// month.insert(18);
    /// month.insert(1);
    /// month.insert(31);
    ///
    /// let days: Vec<u32> = month.iter().collect();
    /// assert_eq!(days, [1, 18, 31]);
    /// assert_eq!(CompactMonth::new().iter().count(), 0);
    /// ```
    pub fn iter(self) -> impl Iterator<Item = u32> {
        let val = self.0;
        let bit_len = u32::BITS - val.leading_zeros();

        (0..bit_len)
            .filter(move |day0| val & (1 << day0) != 0)
            .map(|day0| day0 + 1)
    }

    /// Get the first day included in this month if it is not empty.
    ///
    /// ```
    /// use compact_calendar::CompactMonth;
    ///
    /// let mut month = CompactMonth::new();
    /// assert_eq!(month.first(), None);
    ///
    /// month.insert(31);
    /// assert_eq!(month.first(), Some(31));
    ///
    /// month.insert(8);
    /// assert_eq!(month.first(), Some(8));
    /// ```
    pub fn first(self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() + 1)
        }
    }

    /// Get the first day included in this month that follows the input day, if such a day exists.
    ///
    /// ```
    /// use compact_calendar::CompactMonth;
    ///
    /// let mut month = CompactMonth::new();
    /// month.insert(4);
    /// month.insert(17);
    ///
    /// assert_eq!(month.first_after(2), Some(4));
    /// assert_eq!(month.first_after(4), Some(17));
    /// assert_eq!(month.first_after(17), None);
    /// assert_eq!(month.first_after(31), None);
    /// ```
    pub fn first_after(self, day: u32) -> Option<u32> {
        assert!((1..=31).contains(&day));
        let shifted = self.0 >> day;

        if shifted == 0 {
            None
        } else {
            Some(day + shifted.trailing_zeros() + 1)
        }
    }

    /// Count number of days included for this month.
    ///
    /// ```
    /// use compact_calendar::CompactMonth;
    ///
    /// let mut month = CompactMonth::new();
    /// month.insert(26);
    /// month.insert(3);
    /// assert_eq!(month.count(), 2);
    /// ```
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl fmt::Debug for CompactMonth {
    /// ```
    /// use compact_calendar::CompactMonth;
    ///
    /// let mut month = CompactMonth::new();
    /// month.insert(26);
    /// month.insert(3);
    /// assert_eq!(format!("{month:?}"), "{03, 26}");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugDay(u32);

        impl fmt::Debug for DebugDay {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:02}", self.0)
            }
        }

        f.debug_set().entries(self.iter().map(DebugDay)).finish()
    }
}
