use core::cmp::Ordering;
use core::fmt::Display;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Sub};

use crate::units::{weighted_abs_sum, NANOSECOND_WEIGHTS};

/// A duration with whole nanosecond resolution. Like `coarse::Duration`, each
/// field contributes its absolute value to the total, so the number of
/// nanoseconds is never negative.
#[derive(Copy, Clone, Default, Debug)]
pub struct HighResDuration {
    hour: i64,
    minute: i64,
    second: i64,
    millisecond: i64,
    microsecond: i64,
    nanosecond: i64,
}

impl HighResDuration {
    pub fn new(
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
        microsecond: i64,
        nanosecond: i64,
    ) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            nanosecond,
        }
    }

    pub fn from_nanos(nanos: i64) -> Self {
        Self::new(0, 0, 0, 0, 0, nanos)
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

    pub fn millisecond(&self) -> i64 {
        self.millisecond
    }

    pub fn microsecond(&self) -> i64 {
        self.microsecond
    }

    pub fn nanosecond(&self) -> i64 {
        self.nanosecond
    }

    /// Returns the total number of nanoseconds, counting every field by its
    /// absolute value.
    pub fn as_nanos(&self) -> u128 {
        weighted_abs_sum(
            [
                self.hour,
                self.minute,
                self.second,
                self.millisecond,
                self.microsecond,
                self.nanosecond,
            ],
            NANOSECOND_WEIGHTS,
        )
    }
}

impl From<crate::coarse::Duration> for HighResDuration {
    fn from(other: crate::coarse::Duration) -> Self {
        Self::new(other.hour(), other.minute(), other.second(), 0, 0, 0)
    }
}

impl PartialEq for HighResDuration {
    fn eq(&self, other: &Self) -> bool {
        self.as_nanos() == other.as_nanos()
    }
}

impl Eq for HighResDuration {}

impl PartialOrd for HighResDuration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HighResDuration {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_nanos().cmp(&other.as_nanos())
    }
}

impl Hash for HighResDuration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_nanos().hash(state);
    }
}

impl Display for HighResDuration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_nanos())
    }
}

impl Add<HighResDuration> for HighResDuration {
    type Output = u128;

    fn add(self, rhs: HighResDuration) -> Self::Output {
        self.as_nanos() + rhs.as_nanos()
    }
}

impl Sub<HighResDuration> for HighResDuration {
    type Output = u128;

    fn sub(self, rhs: HighResDuration) -> Self::Output {
        self.as_nanos().saturating_sub(rhs.as_nanos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert() {
        assert_eq!(
            HighResDuration::new(1, 1, 1, 1, 1, 1).as_nanos(),
            3_661_001_001_001
        );
        assert_eq!(
            HighResDuration::new(1, 1, 1, 0, 0, 0).as_nanos(),
            3_661_000_000_000
        );
        assert_eq!(
            HighResDuration::new(0, 0, 0, -1, -1, -1).as_nanos(),
            1_001_001
        );
    }

    #[test]
    fn compare() {
        let a = HighResDuration::new(1, 1, 1, 1, 1, 1);
        let b = HighResDuration::new(1, 1, 1, 0, 0, 0);

        assert!(a != b);
        assert!(!(b > a));
        assert!(b < a);
        assert_eq!(
            HighResDuration::new(0, 0, 1, 0, 0, 0),
            HighResDuration::new(0, 0, 0, 1000, 0, 0)
        );
    }

    #[test]
    fn arithmetic() {
        let a = HighResDuration::new(1, 1, 1, 1, 1, 1);
        let b = HighResDuration::new(1, 1, 1, 0, 0, 0);

        assert_eq!(a + b, 7_322_001_001_001);
        assert_eq!(a - b, 1_001_001);
        assert_eq!(b - a, 0);
    }

    #[test]
    fn from_coarse() {
        let coarse = crate::coarse::Duration::new(1, -2, 3);
        let precise = HighResDuration::from(coarse);

        assert_eq!(precise.hour(), 1);
        assert_eq!(precise.minute(), -2);
        assert_eq!(precise.second(), 3);
        assert_eq!(precise.as_nanos(), coarse.as_secs() * 1_000_000_000);
    }

    #[test]
    fn display() {
        assert_eq!(
            HighResDuration::new(1, 1, 1, 1, 1, 1).to_string(),
            "3661001001001"
        );
    }
}
