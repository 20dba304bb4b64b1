//! Comparison between coarse and precise durations.

use core::fmt::Display;

use log::trace;

use crate::*;

/// The outcome of a cross-scale comparison.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Comparison {
    Greater,
    Less,
    Equal,
}

impl From<core::cmp::Ordering> for Comparison {
    fn from(other: core::cmp::Ordering) -> Self {
        match other {
            core::cmp::Ordering::Greater => Comparison::Greater,
            core::cmp::Ordering::Less => Comparison::Less,
            core::cmp::Ordering::Equal => Comparison::Equal,
        }
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Comparison::Greater => "Greater",
            Comparison::Less => "Less",
            Comparison::Equal => "Equal",
        };
        f.write_str(name)
    }
}

/// Compares a `coarse::Duration` against a `precise::HighResDuration` by
/// scaling the coarse duration to nanoseconds.
pub struct CrossScaleComparator;

impl CrossScaleComparator {
    pub fn compare(duration: &Duration, high_res: &HighResDuration) -> Comparison {
        let scaled = duration.as_secs() * NANOS_PER_SEC as u128;
        let nanos = high_res.as_nanos();

        trace!("comparing {scaled}ns against {nanos}ns");

        scaled.cmp(&nanos).into()
    }
}
