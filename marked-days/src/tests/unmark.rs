use std::collections::HashSet;

use chrono::{Days, Month, Months};

use crate::{date, Calendar, MarkedDays};

#[test]
fn mark_then_unmark() {
    let mut store = MarkedDays::new();
    store.mark(date!("2016-03-15"));
    store.unmark(date!("2016-03-15"));
    assert!(!store.is_marked(date!("2016-03-15")));
}

#[test]
fn unmark_keeps_others() {
    let now = date!("2024-06-15");
    let mut store = MarkedDays::new();

    store.mark(now + Days::new(1));
    store.mark(now);
    store.mark(now + Months::new(12));
    store.mark(now + Months::new(1));
    store.mark(now - Months::new(13));
    store.mark(now - Months::new(13) - Days::new(1));

    store.unmark(now + Days::new(1));
    store.unmark(now);
    store.unmark(now);
    store.unmark(now + Months::new(13) + Days::new(1));
    store.unmark(now - Months::new(13) - Days::new(1));

    assert!(store.is_marked(now + Months::new(12)));
    assert!(store.is_marked(now + Months::new(1)));
    assert!(store.is_marked(now - Months::new(13)));
    assert!(!store.is_marked(now - Months::new(13) - Days::new(1)));
    assert!(!store.is_marked(now + Months::new(13) + Days::new(1)));
    assert!(!store.is_marked(now + Days::new(1)));
    assert!(!store.is_marked(now));
}

#[test]
fn unmark_absent_year_does_not_allocate() {
    let mut store = MarkedDays::new();
    store.unmark(date!("2016-03-15"));

    assert!(store.compact_year(2016).is_none());
    assert_eq!(store, MarkedDays::new());
}

#[test]
fn unmark_unmarked_day_is_noop() {
    let mut store = MarkedDays::new();
    store.mark(date!("2016-03-14"));

    let before = store.clone();
    store.unmark(date!("2016-03-15"));
    assert_eq!(store, before);
}

#[test]
fn emptied_year_stays_allocated() {
    let mut store = MarkedDays::new();
    store.mark(date!("2016-03-15"));
    store.unmark(date!("2016-03-15"));

    let year = store.compact_year(2016).expect("year should stay allocated");
    assert!(year.is_empty());
    assert_eq!(store.month_mask(2016, Month::March), 0);
    assert!(store.month(2016, Month::March).is_empty());
    assert!(store.year(2016).is_empty());
}

#[test]
fn emptied_year_equals_absent_year() {
    let mut store = MarkedDays::new();
    store.mark(date!("2016-03-15"));
    store.unmark(date!("2016-03-15"));

    assert!(store.compact_year(2016).is_some());
    assert_eq!(store.year(2016), MarkedDays::new().year(2016));
    assert_eq!(store, MarkedDays::new());

    let stores: HashSet<_> = [store.clone(), MarkedDays::new()].into_iter().collect();
    assert_eq!(stores.len(), 1);

    store.mark(date!("2017-01-01"));
    let mut other = MarkedDays::new();
    other.mark(date!("2017-01-01"));
    assert_eq!(store, other);
    assert_ne!(store, MarkedDays::new());
}
