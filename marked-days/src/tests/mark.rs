use chrono::{Days, FixedOffset, Months, NaiveDate, TimeZone, Utc};

use crate::{date, datetime, Calendar, MarkedDays};

#[test]
fn simple() {
    let mut store = MarkedDays::new();
    assert!(!store.is_marked(date!("2016-03-15")));

    store.mark(date!("2016-03-15"));
    assert!(store.is_marked(date!("2016-03-15")));
}

#[test]
fn isolation() {
    let day = date!("2016-03-15");

    let others = [
        day - Days::new(1),
        day + Days::new(1),
        day - Months::new(1),
        day + Months::new(1),
        day - Months::new(12),
        day + Months::new(24),
    ];

    let mut store = MarkedDays::new();
    store.mark(day);

    for other in others {
        assert!(!store.is_marked(other), "{other} should not be marked");
    }
}

#[test]
fn idempotent() {
    let mut store = MarkedDays::new();
    store.mark(date!("2020-02-29"));
    store.mark(date!("2020-02-29"));

    assert!(store.is_marked(date!("2020-02-29")));
    assert_eq!(store.count(), 1);
    assert_eq!(store.month_mask(2020, chrono::Month::February), 1 << 28);
}

#[test]
fn multiple_marks() {
    let first = date!("2016-03-01");
    let mut store = MarkedDays::new();

    for i in 0..31 {
        store.mark(first + Days::new(i));
    }

    for i in 0..31 {
        let day = first + Days::new(i);
        assert!(store.is_marked(day));
        assert!(!store.is_marked(day - Months::new(12)));
        assert!(!store.is_marked(day - Months::new(2)));
    }
}

#[test]
fn time_of_day_is_ignored() {
    let mut store = MarkedDays::new();
    store.mark(datetime!("2016-03-15 23:59"));

    assert!(store.is_marked(date!("2016-03-15")));
    assert!(store.is_marked(datetime!("2016-03-15 00:00")));
    assert!(store.is_marked(Utc.with_ymd_and_hms(2016, 3, 15, 12, 30, 0).unwrap()));
    assert!(!store.is_marked(datetime!("2016-03-16 00:00")));
}

#[test]
fn local_date_is_used() {
    let tz = FixedOffset::east_opt(9 * 3600).unwrap();

    // 2016-03-15 20:00 UTC is already the 16th in this timezone
    let date_time = tz.with_ymd_and_hms(2016, 3, 16, 5, 0, 0).unwrap();

    let mut store = MarkedDays::new();
    store.mark(date_time);

    assert!(store.is_marked(date!("2016-03-16")));
    assert!(!store.is_marked(date!("2016-03-15")));

    store.unmark(date_time.with_timezone(&Utc).date_naive());
    assert!(store.is_marked(date!("2016-03-16")));
}

#[test]
fn far_years() {
    let ides = NaiveDate::from_ymd_opt(-44, 3, 15).unwrap();

    let mut store = MarkedDays::new();
    store.mark(ides);
    store.mark(date!("9999-12-31"));

    assert!(store.is_marked(ides));
    assert!(store.is_marked(date!("9999-12-31")));
    assert_eq!(store.year(-44), [ides]);
    assert_eq!(store.first_after(ides), Some(date!("9999-12-31")));
}
