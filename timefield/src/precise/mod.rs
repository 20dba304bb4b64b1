//! Precise durations extend the coarse fields with millisecond, microsecond,
//! and nanosecond fields and convert to a whole number of nanoseconds.

mod duration;

pub use duration::HighResDuration;
