//! A duration of any kind, for code which handles mixed durations at runtime.
//!
//! Operations between two `TimeValue`s require both to be the same kind and
//! return `Error::IncompatibleOperand` otherwise. Comparing across scales is
//! done explicitly with `CrossScaleComparator`.

use core::cmp::Ordering;
use core::fmt::Display;

use crate::*;

/// The kind of duration held by a `TimeValue`.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Kind {
    Coarse,
    Normalized,
    Precise,
}

impl Display for Kind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Kind::Coarse => "coarse",
            Kind::Normalized => "normalized",
            Kind::Precise => "precise",
        };
        f.write_str(name)
    }
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum TimeValue {
    Coarse(Duration),
    Normalized(NormalizedDuration),
    Precise(HighResDuration),
}

/// The result of adding or subtracting two `TimeValue`s.
///
/// Coarse and precise durations combine into a plain count of seconds or
/// nanoseconds, normalized durations combine into a new normalized duration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Combined {
    Seconds(u128),
    Nanoseconds(u128),
    Normalized(NormalizedDuration),
}

impl TimeValue {
    pub fn kind(&self) -> Kind {
        match self {
            TimeValue::Coarse(_) => Kind::Coarse,
            TimeValue::Normalized(_) => Kind::Normalized,
            TimeValue::Precise(_) => Kind::Precise,
        }
    }

    fn incompatible(&self, other: &Self) -> Error {
        Error::IncompatibleOperand {
            lhs: self.kind(),
            rhs: other.kind(),
        }
    }

    pub fn try_eq(&self, other: &Self) -> Result<bool, Error> {
        self.try_cmp(other).map(|ordering| ordering == Ordering::Equal)
    }

    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, Error> {
        match (self, other) {
            (TimeValue::Coarse(a), TimeValue::Coarse(b)) => Ok(a.cmp(b)),
            (TimeValue::Normalized(a), TimeValue::Normalized(b)) => {
                Ok(a.total_secs().cmp(&b.total_secs()))
            }
            (TimeValue::Precise(a), TimeValue::Precise(b)) => Ok(a.cmp(b)),
            _ => Err(self.incompatible(other)),
        }
    }

    pub fn try_add(&self, other: &Self) -> Result<Combined, Error> {
        match (self, other) {
            (TimeValue::Coarse(a), TimeValue::Coarse(b)) => Ok(Combined::Seconds(*a + *b)),
            (TimeValue::Normalized(a), TimeValue::Normalized(b)) => {
                a.checked_add(b).map(Combined::Normalized)
            }
            (TimeValue::Precise(a), TimeValue::Precise(b)) => Ok(Combined::Nanoseconds(*a + *b)),
            _ => Err(self.incompatible(other)),
        }
    }

    pub fn try_sub(&self, other: &Self) -> Result<Combined, Error> {
        match (self, other) {
            (TimeValue::Coarse(a), TimeValue::Coarse(b)) => Ok(Combined::Seconds(*a - *b)),
            (TimeValue::Normalized(a), TimeValue::Normalized(b)) => {
                a.checked_sub(b).map(Combined::Normalized)
            }
            (TimeValue::Precise(a), TimeValue::Precise(b)) => Ok(Combined::Nanoseconds(*a - *b)),
            _ => Err(self.incompatible(other)),
        }
    }
}

impl Display for TimeValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimeValue::Coarse(v) => v.fmt(f),
            TimeValue::Normalized(v) => v.fmt(f),
            TimeValue::Precise(v) => v.fmt(f),
        }
    }
}

impl From<Duration> for TimeValue {
    fn from(other: Duration) -> Self {
        TimeValue::Coarse(other)
    }
}

impl From<NormalizedDuration> for TimeValue {
    fn from(other: NormalizedDuration) -> Self {
        TimeValue::Normalized(other)
    }
}

impl From<HighResDuration> for TimeValue {
    fn from(other: HighResDuration) -> Self {
        TimeValue::Precise(other)
    }
}
