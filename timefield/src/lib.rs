//! This crate provides clock-like duration types which are built from
//! hour/minute/second style fields and compared by their total value.
//!
//! There are three representations:
//!
//! * `coarse::Duration` keeps hours, minutes, and seconds and converts to a
//!   whole number of seconds.
//! * `normalized::NormalizedDuration` adds a day field and can be normalized
//!   so that every field is within its canonical range.
//! * `precise::HighResDuration` adds milli-, micro-, and nanosecond fields and
//!   converts to a whole number of nanoseconds.
//!
//! Fields of the coarse and precise types may be negative. Each field
//! contributes its absolute value to the total, so totals are never negative.
//!
//! Totals use 128bit integers, which means that no combination of `i64` field
//! values can overflow a conversion.
//!
//! ```
//! use timefield::{Comparison, CrossScaleComparator, Duration, HighResDuration};
//!
//! let coarse = Duration::new(1, 1, 1);
//! let precise = HighResDuration::new(1, 1, 1, 0, 0, 0);
//!
//! assert_eq!(coarse.as_secs(), 3661);
//! assert_eq!(
//!     CrossScaleComparator::compare(&coarse, &precise),
//!     Comparison::Equal
//! );
//! ```

pub mod coarse;
pub mod compare;
pub mod demo;
pub mod normalized;
pub mod precise;
pub mod value;

mod errors;
mod units;

pub use coarse::Duration;
pub use compare::{Comparison, CrossScaleComparator};
pub use errors::Error;
pub use normalized::NormalizedDuration;
pub use precise::HighResDuration;
pub use value::{Combined, Kind, TimeValue};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_DAY: u64 = 86_400;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;
