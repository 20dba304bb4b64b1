//! Unit weights shared by the absolute-sum duration types.

use crate::*;

/// Weights, in seconds, for the `hour, minute, second` fields.
pub(crate) const SECOND_WEIGHTS: [u64; 3] = [SECS_PER_HOUR, SECS_PER_MINUTE, 1];

/// Weights, in nanoseconds, for the `hour, minute, second, millisecond,
/// microsecond, nanosecond` fields.
pub(crate) const NANOSECOND_WEIGHTS: [u64; 6] = [
    SECS_PER_HOUR * NANOS_PER_SEC,
    SECS_PER_MINUTE * NANOS_PER_SEC,
    NANOS_PER_SEC,
    NANOS_PER_MILLI,
    NANOS_PER_MICRO,
    1,
];

/// Sum the absolute value of each field multiplied by its unit weight.
///
/// The largest possible result for six fields is roughly `2^63 * 3.7e12`,
/// which is well within the range of a `u128`.
pub(crate) fn weighted_abs_sum<const N: usize>(fields: [i64; N], weights: [u64; N]) -> u128 {
    fields
        .iter()
        .zip(weights.iter())
        .map(|(field, weight)| field.unsigned_abs() as u128 * *weight as u128)
        .sum()
}

/// Split a total number of seconds into `(day, hour, minute, second)` using
/// floor division, so the hour, minute, and second parts are never negative.
pub(crate) fn split_secs(total: i128) -> (i128, i128, i128, i128) {
    let day_secs = SECS_PER_DAY as i128;
    let hour_secs = SECS_PER_HOUR as i128;
    let minute_secs = SECS_PER_MINUTE as i128;

    let day = total.div_euclid(day_secs);
    let rem = total.rem_euclid(day_secs);

    (
        day,
        rem / hour_secs,
        rem % hour_secs / minute_secs,
        rem % minute_secs,
    )
}
