#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod calendar;
pub mod error;
pub mod store;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;

mod utils;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::calendar::Calendar;
pub use crate::store::MarkedDays;
pub use crate::utils::dates::{parse_day, MONTHS};
pub use compact_calendar::{CompactCalendar, CompactMonth, CompactYear};
