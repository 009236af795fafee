//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.
use std::collections::BTreeSet;

use arbitrary::Arbitrary;
use chrono::{Datelike, Days, Month, NaiveDate};

use crate::{Calendar, MarkedDays};

/// First day that can be generated by the fuzzer, 1970-01-01.
fn fuzz_epoch() -> NaiveDate {
    NaiveDate::default()
}

/// A day, counted from 1970-01-01.
#[derive(Arbitrary, Clone, Copy)]
pub struct Day(pub u16);

impl Day {
    pub fn date(self) -> NaiveDate {
        fuzz_epoch() + Days::new(self.0.into())
    }
}

impl std::fmt::Debug for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.date())
    }
}

/// An operation to replay on both the store and its reference model
#[derive(Arbitrary, Clone, Debug)]
pub enum Operation {
    Mark(Day),
    Unmark(Day),
    IsMarked(Day),
    Month { year: u8, month: u8 },
    Year(u8),
    FirstAfter(Day),
    Streak(Day),
}

/// A fuzzing example
#[derive(Arbitrary, Clone, Debug)]
pub struct Data {
    pub operations: Vec<Operation>,
}

/// A naive calendar that keeps all marked days in a sorted set.
#[derive(Default)]
pub struct ModelCalendar(BTreeSet<NaiveDate>);

impl ModelCalendar {
    fn date(day: impl Datelike) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(day.year(), day.month(), day.day())
    }

    fn first_after(&self, day: NaiveDate) -> Option<NaiveDate> {
        self.0.range(day.succ_opt()?..).next().copied()
    }

    fn streak_at(&self, day: NaiveDate) -> u32 {
        let mut streak = 0;
        let mut curr = Some(day);

        while let Some(date) = curr.filter(|date| self.0.contains(date)) {
            streak += 1;
            curr = date.pred_opt();
        }

        streak
    }
}

impl Calendar for ModelCalendar {
    fn mark(&mut self, day: impl Datelike) {
        self.0.extend(Self::date(day));
    }

    fn unmark(&mut self, day: impl Datelike) {
        if let Some(date) = Self::date(day) {
            self.0.remove(&date);
        }
    }

    fn is_marked(&self, day: impl Datelike) -> bool {
        Self::date(day).is_some_and(|date| self.0.contains(&date))
    }

    fn month(&self, year: i32, month: Month) -> Vec<NaiveDate> {
        let month = month.number_from_month();

        self.0
            .iter()
            .filter(|date| date.year() == year && date.month() == month)
            .copied()
            .collect()
    }
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_store(data: Data) -> bool {
    if data.operations.is_empty() {
        return false;
    }

    let mut store = MarkedDays::new();
    let mut model = ModelCalendar::default();

    for operation in data.operations {
        match operation {
            Operation::Mark(day) => {
                store.mark(day.date());
                model.mark(day.date());
            }
            Operation::Unmark(day) => {
                store.unmark(day.date());
                model.unmark(day.date());
            }
            Operation::IsMarked(day) => {
                assert_eq!(store.is_marked(day.date()), model.is_marked(day.date()));
            }
            Operation::Month { year, month } => {
                let Ok(month) = Month::try_from(month % 12 + 1) else {
                    return false;
                };

                let year = fuzz_epoch().year() + i32::from(year);
                assert_eq!(store.month(year, month), model.month(year, month));
                assert_eq!(store.month_mask(year, month) >> 31, 0);
            }
            Operation::Year(year) => {
                let year = fuzz_epoch().year() + i32::from(year);
                let days = store.year(year);
                assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
                assert_eq!(days, model.year(year));
            }
            Operation::FirstAfter(day) => {
                assert_eq!(
                    store.first_after(day.date()),
                    model.first_after(day.date()),
                );
            }
            Operation::Streak(day) => {
                assert_eq!(store.streak_at(day.date()), model.streak_at(day.date()));
            }
        }
    }

    assert_eq!(store.count() as usize, model.0.len());
    assert!(store.iter().eq(model.0.iter().copied()));
    true
}
