use chrono::{DateTime, Month, NaiveDate, NaiveTime, Utc};

use crate::error::Result;

/// All months of a year, in chronological order.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Parse a day written as `YYYY-MM-DD`.
///
/// ```
/// use marked_days::parse_day;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_day("2016-03-15").unwrap(), NaiveDate::from_ymd_opt(2016, 3, 15).unwrap());
/// assert!(parse_day("2016-02-30").is_err());
/// assert!(parse_day("yesterday").is_err());
/// ```
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")?)
}

pub(crate) fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
