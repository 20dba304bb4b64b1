//! Coarse durations are built from hour, minute, and second fields and
//! convert to a whole number of seconds.

mod duration;

pub use duration::Duration;
