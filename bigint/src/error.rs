//! Error types surfaced by the [`crate::BigInt`] arithmetic contract.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntError {
    #[error("invalid decimal number")]
    InvalidNumber,

    #[error("division by zero")]
    DivideByZero,

    #[error("subtraction would produce a negative result")]
    NegativeResult,

    #[error("no modular inverse exists")]
    NoInverse,

    #[error("invalid length (must be >= 1)")]
    InvalidLength,

    #[error("empty range, lo must be < hi")]
    EmptyRange,
}

pub type Result<T> = std::result::Result<T, BigIntError>;
