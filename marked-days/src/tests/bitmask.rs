use chrono::{Datelike, Days, Month};

use crate::{date, datetime, Calendar, MarkedDays};

#[test]
fn full_month() {
    let march = datetime!("2016-03-01 12:00");
    let mut store = MarkedDays::new();

    for i in 0..31 {
        store.mark(march + Days::new(i));
    }

    assert_eq!(store.month_mask(2016, Month::March), 0x7fff_ffff);
    assert_eq!(store.month(2016, Month::March).len(), 31);

    store.unmark(march + Days::new(14));
    assert_eq!(store.month_mask(2016, Month::March), 0x7fff_bfff);
    assert_eq!(store.month_mask(2016, Month::January), 0);

    let days = store.month(2016, Month::March);
    assert_eq!(days.len(), 30);
    assert!(!days.contains(&date!("2016-03-15")));
    assert_eq!(days.first(), Some(&date!("2016-03-01")));
    assert_eq!(days.last(), Some(&date!("2016-03-31")));
}

#[test]
fn day_bit_positions() {
    let mut store = MarkedDays::new();
    store.mark(date!("2021-07-01"));
    assert_eq!(store.month_mask(2021, Month::July), 0b1);

    store.mark(date!("2021-07-31"));
    assert_eq!(store.month_mask(2021, Month::July), 0x4000_0001);
}

#[test]
fn high_bit_is_never_set() {
    let mut store = MarkedDays::new();
    let mut day = date!("2020-01-01");

    while day.year() == 2020 {
        store.mark(day);
        day = day.succ_opt().unwrap();
    }

    for month in crate::MONTHS {
        assert_eq!(store.month_mask(2020, month) >> 31, 0);
    }

    assert_eq!(store.count(), 366);
}

#[test]
fn debug_masks() {
    let mut store = MarkedDays::new();
    store.mark(date!("2021-07-31"));
    store.mark(date!("2021-07-01"));
    store.mark(date!("2021-02-14"));

    let year = store.compact_year(2021).unwrap();
    assert_eq!(format!("{year:?}"), "{02-14, 07-01, 07-31}");
    assert_eq!(format!("{:?}", year.month(7)), "{01, 31}");
}
