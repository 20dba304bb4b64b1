use core::cmp::Ordering;
use core::fmt::Display;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Sub};

use crate::units::{weighted_abs_sum, SECOND_WEIGHTS};

/// A duration with whole second resolution. The fields are kept as given,
/// including negative values, and each contributes its absolute value to the
/// total number of seconds.
///
/// Equality, ordering, and hashing all use the total, so `Duration::new(0, 1,
/// 0)` and `Duration::new(0, 0, 60)` are interchangeable.
///
/// Adding or subtracting two durations yields a plain number of seconds.
/// Subtraction saturates at zero.
#[derive(Copy, Clone, Default, Debug)]
pub struct Duration {
    hour: i64,
    minute: i64,
    second: i64,
}

impl Duration {
    pub fn new(hour: i64, minute: i64, second: i64) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    pub fn from_secs(secs: i64) -> Self {
        Self::new(0, 0, secs)
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

    /// Returns the total number of seconds. Negative fields are counted by
    /// their absolute value, so the result is never negative.
    pub fn as_secs(&self) -> u128 {
        weighted_abs_sum([self.hour, self.minute, self.second], SECOND_WEIGHTS)
    }
}

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.as_secs() == other.as_secs()
    }
}

impl Eq for Duration {}

impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Duration {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_secs().cmp(&other.as_secs())
    }
}

impl Hash for Duration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_secs().hash(state);
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_secs())
    }
}

impl Add<Duration> for Duration {
    type Output = u128;

    fn add(self, rhs: Duration) -> Self::Output {
        self.as_secs() + rhs.as_secs()
    }
}

impl Sub<Duration> for Duration {
    type Output = u128;

    fn sub(self, rhs: Duration) -> Self::Output {
        self.as_secs().saturating_sub(rhs.as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn convert() {
        assert_eq!(Duration::new(0, 1, 0).as_secs(), 60);
        assert_eq!(Duration::new(1, 1, 1).as_secs(), 3661);
        assert_eq!(Duration::new(-1, -1, -1).as_secs(), 3661);
        assert_eq!(Duration::new(0, 0, 0).as_secs(), 0);
        assert_eq!(Duration::from_secs(-90).as_secs(), 90);
    }

    #[test]
    fn compare() {
        let a = Duration::new(0, 1, 0);
        let b = Duration::new(1, 1, 1);

        assert!(a != b);
        assert!(a < b);
        assert!(b > a);
        assert_eq!(Duration::new(0, 1, 0), Duration::new(0, 0, 60));
        assert_eq!(Duration::new(0, -1, 0), Duration::new(0, 1, 0));
    }

    #[test]
    fn arithmetic() {
        let a = Duration::new(0, 1, 0);
        let b = Duration::new(1, 1, 1);

        assert_eq!(a + b, 3721);
        assert_eq!(b - a, 3601);
        assert_eq!(a - b, 0);
        assert_eq!(a - a, 0);
    }

    #[test]
    fn display() {
        assert_eq!(Duration::new(1, 1, 1).to_string(), "3661");
        assert_eq!(Duration::new(0, -2, 0).to_string(), "120");
    }

    #[test]
    fn hash_follows_equality() {
        let mut set = HashSet::new();
        set.insert(Duration::new(0, 1, 0));
        assert!(set.contains(&Duration::new(0, 0, 60)));
        assert!(set.contains(&Duration::new(0, -1, 0)));
        assert!(!set.contains(&Duration::new(0, 0, 61)));
    }
}
