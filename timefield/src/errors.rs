use thiserror::Error;

use crate::Kind;

/// Errors returned for duration conversions and kind-checked operations.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("incompatible operands: {lhs} and {rhs} can not be combined")]
    IncompatibleOperand { lhs: Kind, rhs: Kind },
    #[error("the normalized day count does not fit in an i64")]
    Overflow,
}
