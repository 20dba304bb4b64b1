//! A day/hour/minute/second duration which can be normalized.
//!
//! Fields may be constructed out of range, for example 61 minutes, and may be
//! negative. Unlike the coarse and precise types, the signed field values are
//! used as-is when computing the total, so a `NormalizedDuration` can
//! represent a negative span.
//!
//! Normalization rewrites the fields from the total using floor division:
//!
//! ```text
//! day    = total div 86400
//! hour   = (total mod 86400) div 3600
//! minute = (total mod 86400 mod 3600) div 60
//! second = total mod 86400 mod 60
//! ```
//!
//! After normalization the hour is in `0..24` and the minute and second are in
//! `0..60`. Only the day may be negative.
//!
//! Normalization is explicit. Reading the total, formatting, and comparing
//! never modify a value.

use core::fmt::Display;
use core::hash::{Hash, Hasher};

use log::trace;

use crate::units::split_secs;
use crate::*;

#[derive(Copy, Clone, Default, Debug)]
pub struct NormalizedDuration {
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
}

impl NormalizedDuration {
    /// Create a duration from hours, minutes, and seconds with no days.
    pub fn new(hour: i64, minute: i64, second: i64) -> Self {
        Self::with_days(0, hour, minute, second)
    }

    pub fn with_days(day: i64, hour: i64, minute: i64, second: i64) -> Self {
        Self {
            day,
            hour,
            minute,
            second,
        }
    }

    /// Create a normalized duration from a signed number of seconds.
    pub fn from_secs(secs: i64) -> Self {
        let (day, hour, minute, second) = split_secs(secs as i128);

        // |secs| / 86400 always fits and the other parts are bounded
        Self {
            day: day as i64,
            hour: hour as i64,
            minute: minute as i64,
            second: second as i64,
        }
    }

    fn from_total(total: i128) -> Result<Self, Error> {
        let (day, hour, minute, second) = split_secs(total);
        let day = i64::try_from(day).map_err(|_| Error::Overflow)?;

        Ok(Self {
            day,
            hour: hour as i64,
            minute: minute as i64,
            second: second as i64,
        })
    }

    pub fn day(&self) -> i64 {
        self.day
    }

    pub fn hour(&self) -> i64 {
        self.hour
    }

    pub fn minute(&self) -> i64 {
        self.minute
    }

    pub fn second(&self) -> i64 {
        self.second
    }

    /// Returns the signed total number of seconds from the raw fields.
    pub fn total_secs(&self) -> i128 {
        self.day as i128 * SECS_PER_DAY as i128
            + self.hour as i128 * SECS_PER_HOUR as i128
            + self.minute as i128 * SECS_PER_MINUTE as i128
            + self.second as i128
    }

    /// Returns true if every field is already in its canonical range.
    pub fn is_normalized(&self) -> bool {
        (0..24).contains(&self.hour)
            && (0..60).contains(&self.minute)
            && (0..60).contains(&self.second)
    }

    /// Returns a copy of this duration with its fields normalized.
    pub fn normalized(&self) -> Result<Self, Error> {
        Self::from_total(self.total_secs())
    }

    /// Normalize the fields in place and return the total number of seconds.
    ///
    /// On error the fields are left unchanged.
    pub fn normalize(&mut self) -> Result<i128, Error> {
        let total = self.total_secs();
        let normalized = Self::from_total(total)?;

        trace!(
            "normalized {}:{}:{}:{} to {}",
            self.day,
            self.hour,
            self.minute,
            self.second,
            normalized
        );

        *self = normalized;
        Ok(total)
    }

    /// Returns the normalized sum of two durations.
    pub fn checked_add(&self, other: &Self) -> Result<Self, Error> {
        Self::from_total(self.total_secs() + other.total_secs())
    }

    /// Returns the normalized difference of two durations. If `other` is at
    /// least as long as `self` the result is zero.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, Error> {
        let diff = self.total_secs() - other.total_secs();

        if diff > 0 {
            Self::from_total(diff)
        } else {
            Ok(Self::default())
        }
    }
}

impl PartialEq for NormalizedDuration {
    fn eq(&self, other: &Self) -> bool {
        self.total_secs() == other.total_secs()
    }
}

impl Eq for NormalizedDuration {}

impl Hash for NormalizedDuration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total_secs().hash(state);
    }
}

/// Formats as `dd:hh:mm:ss` using the normalized fields, without modifying
/// the value.
impl Display for NormalizedDuration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (day, hour, minute, second) = split_secs(self.total_secs());
        write!(f, "{day:02}:{hour:02}:{minute:02}:{second:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize() {
        let mut a = NormalizedDuration::new(72, 61, 0);
        assert!(!a.is_normalized());
        assert_eq!(a.normalize(), Ok(262_860));
        assert!(a.is_normalized());
        assert_eq!(
            (a.day(), a.hour(), a.minute(), a.second()),
            (3, 1, 1, 0)
        );

        let b = NormalizedDuration::new(24, 1, 1).normalized().unwrap();
        assert_eq!(
            (b.day(), b.hour(), b.minute(), b.second()),
            (1, 0, 1, 1)
        );
    }

    #[test]
    fn normalize_negative() {
        let a = NormalizedDuration::new(0, 0, -1).normalized().unwrap();
        assert_eq!(
            (a.day(), a.hour(), a.minute(), a.second()),
            (-1, 23, 59, 59)
        );
        assert_eq!(a.total_secs(), -1);
    }

    #[test]
    fn normalize_overflow() {
        let mut a = NormalizedDuration::with_days(i64::MAX, 24, 0, 0);
        assert_eq!(a.normalize(), Err(Error::Overflow));
        assert_eq!(a.day(), i64::MAX);
        assert_eq!(a.hour(), 24);
    }

    #[test]
    fn display() {
        let a = NormalizedDuration::new(72, 61, 0);
        assert_eq!(a.to_string(), "03:01:01:00");
        // formatting does not normalize
        assert_eq!(a.hour(), 72);

        assert_eq!(NormalizedDuration::new(24, 1, 1).to_string(), "01:00:01:01");
        assert_eq!(NormalizedDuration::from_secs(-1).to_string(), "-1:23:59:59");
        assert_eq!(
            NormalizedDuration::with_days(123, 0, 0, 0).to_string(),
            "123:00:00:00"
        );
    }

    #[test]
    fn equality() {
        let a = NormalizedDuration::new(72, 61, 0);
        let b = NormalizedDuration::new(24, 1, 1);
        assert!(a != b);
        assert_eq!(a, NormalizedDuration::with_days(3, 1, 1, 0));
    }

    #[test]
    fn add() {
        let a = NormalizedDuration::new(23, 59, 59);
        let b = NormalizedDuration::new(0, 0, 1);
        let sum = a.checked_add(&b).unwrap();

        assert_eq!(sum.to_string(), "01:00:00:00");
        assert!(sum.is_normalized());
        // operands are untouched
        assert_eq!(a.hour(), 23);
        assert_eq!(b.second(), 1);
    }

    #[test]
    fn sub() {
        let a = NormalizedDuration::new(72, 61, 0);
        let b = NormalizedDuration::new(24, 1, 1);

        assert_eq!(a.checked_sub(&b).unwrap().to_string(), "02:00:59:59");
        assert_eq!(b.checked_sub(&a).unwrap(), NormalizedDuration::default());
        assert_eq!(a.checked_sub(&a).unwrap().to_string(), "00:00:00:00");
    }
}
