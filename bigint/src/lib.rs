//! Arbitrary-precision non-negative integer arithmetic, implemented from
//! scratch, no external bignum crate. Decimal storage is exact; limbs use
//! a base-10^9 internal representation for speed.
//!
//! This is the foundation the `prime-gen` and `rsa-core` crates build on.

mod arithmetic;
mod bigint;
mod error;
mod modular;
mod random;

pub use bigint::BigInt;
pub use error::{BigIntError, Result};
