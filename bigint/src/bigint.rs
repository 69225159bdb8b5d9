//! The [`BigInt`] value type: arbitrary-precision, non-negative, immutable.
//!
//! Digits are stored least-significant-limb-first in base `LIMB_BASE`
//! (10^9), so decimal I/O stays exact while arithmetic works on 32-bit
//! limbs with 64/128-bit intermediate accumulators.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{BigIntError, Result};

pub(crate) const LIMB_BASE: u64 = 1_000_000_000;
const LIMB_DIGITS: usize = 9;

/// An arbitrary-precision non-negative integer.
///
/// The canonical form has no leading zero limbs except the value zero
/// itself, which is represented as a single `0` limb.
#[derive(Clone, Eq)]
pub struct BigInt {
    /// Least-significant limb first. Never empty; `[0]` is the canonical zero.
    pub(crate) limbs: Vec<u32>,
}

impl BigInt {
    /// Builds a `BigInt` from already-normalized limbs (least-significant first).
    pub(crate) fn from_limbs(mut limbs: Vec<u32>) -> Self {
        while limbs.len() > 1 && *limbs.last().unwrap() == 0 {
            limbs.pop();
        }
        if limbs.is_empty() {
            limbs.push(0);
        }
        BigInt { limbs }
    }

    /// The canonical zero value.
    pub fn zero() -> Self {
        BigInt { limbs: vec![0] }
    }

    /// The canonical one value.
    pub fn one() -> Self {
        BigInt { limbs: vec![1] }
    }

    /// Parses a decimal string into a `BigInt`.
    ///
    /// Accepts an optional leading `+`. Fails with [`BigIntError::InvalidNumber`]
    /// on empty input or any non-decimal character. Leading zeros are stripped.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.strip_prefix('+').unwrap_or(s);
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BigIntError::InvalidNumber);
        }

        // Strip leading zeros, but keep at least one digit.
        let trimmed = s.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };

        let bytes = digits.as_bytes();
        let mut limbs = Vec::with_capacity(bytes.len() / LIMB_DIGITS + 1);
        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(LIMB_DIGITS);
            let chunk = std::str::from_utf8(&bytes[start..end]).unwrap();
            // chunk is pure ASCII digits by construction.
            let limb: u32 = chunk.parse().expect("chunk is validated decimal digits");
            limbs.push(limb);
            end = start;
        }

        Ok(BigInt::from_limbs(limbs))
    }

    /// Renders the canonical decimal form: no leading zeros, zero renders as `"0"`.
    pub fn to_decimal(&self) -> String {
        let mut out = String::with_capacity(self.limbs.len() * LIMB_DIGITS);
        let mut iter = self.limbs.iter().rev();
        if let Some(first) = iter.next() {
            out.push_str(&first.to_string());
        }
        for limb in iter {
            out.push_str(&format!("{:0width$}", limb, width = LIMB_DIGITS));
        }
        out
    }

    /// `true` if this value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    /// `true` if this value is even.
    pub fn is_even(&self) -> bool {
        self.limbs[0] % 2 == 0
    }

    /// Total order over non-negative integers.
    pub fn compare(&self, other: &BigInt) -> Ordering {
        if self.limbs.len() != other.limbs.len() {
            return self.limbs.len().cmp(&other.limbs.len());
        }
        for i in (0..self.limbs.len()).rev() {
            let ord = self.limbs[i].cmp(&other.limbs[i]);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    /// Number of bits in the binary representation (`0` has bit length `0`).
    ///
    /// Computed by repeated halving; adequate for the key sizes this crate
    /// targets, not optimized for very large inputs.
    pub fn bit_length(&self) -> u64 {
        if self.is_zero() {
            return 0;
        }
        let mut n = self.clone();
        let mut bits = 0u64;
        while !n.is_zero() {
            n = n.shift_right_one();
            bits += 1;
        }
        bits
    }

    /// Floor division by two (`self / 2`).
    pub fn shift_right_one(&self) -> BigInt {
        self.divmod_small(2).0
    }

    /// Multiplies by a scalar strictly less than [`LIMB_BASE`].
    pub(crate) fn mul_small(&self, scalar: u32) -> BigInt {
        if scalar == 0 || self.is_zero() {
            return BigInt::zero();
        }
        let mut result = Vec::with_capacity(self.limbs.len() + 1);
        let mut carry: u64 = 0;
        for &limb in &self.limbs {
            let prod = limb as u64 * scalar as u64 + carry;
            result.push((prod % LIMB_BASE) as u32);
            carry = prod / LIMB_BASE;
        }
        while carry > 0 {
            result.push((carry % LIMB_BASE) as u32);
            carry /= LIMB_BASE;
        }
        BigInt::from_limbs(result)
    }

    /// Divides by a scalar strictly less than [`LIMB_BASE`], returning `(quotient, remainder)`.
    pub(crate) fn divmod_small(&self, divisor: u32) -> (BigInt, u32) {
        assert!(divisor > 0, "divmod_small divisor must be non-zero");
        let mut quotient = vec![0u32; self.limbs.len()];
        let mut rem: u64 = 0;
        for i in (0..self.limbs.len()).rev() {
            let cur = rem * LIMB_BASE + self.limbs[i] as u64;
            quotient[i] = (cur / divisor as u64) as u32;
            rem = cur % divisor as u64;
        }
        (BigInt::from_limbs(quotient), rem as u32)
    }

    /// Shifts limbs up by `k` positions, i.e. multiplies by `LIMB_BASE^k`.
    pub(crate) fn shift_limbs(&self, k: usize) -> BigInt {
        if self.is_zero() || k == 0 {
            return self.clone();
        }
        let mut limbs = vec![0u32; k];
        limbs.extend_from_slice(&self.limbs);
        BigInt::from_limbs(limbs)
    }

    /// Big-endian byte representation with no leading zero byte (zero is one `0x00` byte).
    pub fn from_be_bytes(bytes: &[u8]) -> BigInt {
        let mut acc = BigInt::zero();
        for &byte in bytes {
            acc = acc.mul_small(256).add(&BigInt::from(byte as u32));
        }
        acc
    }

    /// Re-expands this value into exactly `width` big-endian bytes, left-padding with zeros.
    ///
    /// Returns `None` if the value does not fit in `width` bytes.
    pub fn to_be_bytes_padded(&self, width: usize) -> Option<Vec<u8>> {
        let mut bytes = Vec::with_capacity(width);
        let mut n = self.clone();
        for _ in 0..width {
            let (q, r) = n.divmod_small(256);
            bytes.push(r as u8);
            n = q;
        }
        if !n.is_zero() {
            return None;
        }
        bytes.reverse();
        Some(bytes)
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        if (value as u64) < LIMB_BASE {
            BigInt {
                limbs: vec![value],
            }
        } else {
            BigInt::from(value as u64)
        }
    }
}

impl From<u64> for BigInt {
    fn from(mut value: u64) -> Self {
        if value == 0 {
            return BigInt::zero();
        }
        let mut limbs = Vec::new();
        while value > 0 {
            limbs.push((value % LIMB_BASE) as u32);
            value /= LIMB_BASE;
        }
        BigInt::from_limbs(limbs)
    }
}

impl From<u8> for BigInt {
    fn from(value: u8) -> Self {
        BigInt::from(value as u32)
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self> {
        BigInt::parse(s)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self.to_decimal())
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialEq<u32> for BigInt {
    fn eq(&self, other: &u32) -> bool {
        *self == BigInt::from(*other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_empty_and_garbage() {
        assert_eq!(BigInt::parse(""), Err(BigIntError::InvalidNumber));
        assert_eq!(BigInt::parse("12a3"), Err(BigIntError::InvalidNumber));
        assert_eq!(BigInt::parse("+"), Err(BigIntError::InvalidNumber));
    }

    #[test]
    fn parse_accepts_leading_plus_and_strips_leading_zeros() {
        assert_eq!(BigInt::parse("+42").unwrap().to_decimal(), "42");
        assert_eq!(BigInt::parse("007").unwrap().to_decimal(), "7");
        assert_eq!(BigInt::parse("0").unwrap().to_decimal(), "0");
        assert_eq!(BigInt::parse("000").unwrap().to_decimal(), "0");
    }

    #[test]
    fn round_trips_through_decimal() {
        for s in ["0", "9", "123456789", "1000000000", "987654321987654321"] {
            let n = BigInt::parse(s).unwrap();
            assert_eq!(n.to_decimal(), s);
        }
    }

    #[test]
    fn round_trip_across_many_limb_widths() {
        let mut s = String::from("1");
        for _ in 0..40 {
            s.push('3');
            let n = BigInt::parse(&s).unwrap();
            assert_eq!(n.to_decimal(), s);
        }
    }

    #[test]
    fn compare_is_total_order() {
        let a = BigInt::parse("100").unwrap();
        let b = BigInt::parse("99").unwrap();
        let c = BigInt::parse("100").unwrap();
        assert_eq!(a.compare(&b), Ordering::Greater);
        assert_eq!(b.compare(&a), Ordering::Less);
        assert_eq!(a.compare(&c), Ordering::Equal);
    }

    #[test]
    fn is_even_and_shift_right() {
        assert!(BigInt::parse("4").unwrap().is_even());
        assert!(!BigInt::parse("7").unwrap().is_even());
        assert_eq!(BigInt::parse("7").unwrap().shift_right_one().to_decimal(), "3");
        assert_eq!(BigInt::parse("1000000001").unwrap().shift_right_one().to_decimal(), "500000000");
    }

    #[test]
    fn byte_round_trip() {
        let n = BigInt::from_be_bytes(&[0x01, 0x02, 0x03]);
        assert_eq!(n.to_decimal(), "66051");
        assert_eq!(n.to_be_bytes_padded(3).unwrap(), vec![0x01, 0x02, 0x03]);
        assert_eq!(n.to_be_bytes_padded(5).unwrap(), vec![0, 0, 0x01, 0x02, 0x03]);
        assert!(n.to_be_bytes_padded(1).is_none());
    }

    #[test]
    fn bit_length_matches_known_values() {
        assert_eq!(BigInt::zero().bit_length(), 0);
        assert_eq!(BigInt::from(1u32).bit_length(), 1);
        assert_eq!(BigInt::from(255u32).bit_length(), 8);
        assert_eq!(BigInt::from(256u32).bit_length(), 9);
    }
}
