//! Error types surfaced by [`crate::generate`].

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimeGenError {
    #[error("length must be a positive integer")]
    InvalidLength,

    #[error("iteration count must be a positive integer")]
    InvalidIterations,
}

pub type Result<T> = std::result::Result<T, PrimeGenError>;
