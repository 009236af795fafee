
mod bitmask;
mod mark;
mod unmark;

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

#[macro_export]
macro_rules! datetime {
    ( $date: expr ) => {{
        use chrono::NaiveDateTime;
        NaiveDateTime::parse_from_str($date, "%Y-%m-%d %H:%M").expect("invalid datetime literal")
    }};
}

/// Build a store with given days marked.
fn store_with(days: &[&str]) -> crate::MarkedDays {
    use crate::Calendar;

    let mut store = crate::MarkedDays::new();

    for day in days {
        store.mark(date!(day));
    }

    store
}
