//! Addition, subtraction, multiplication and long division.

use crate::bigint::{BigInt, LIMB_BASE};
use crate::error::{BigIntError, Result};

impl BigInt {
    /// `self + other`.
    pub fn add(&self, other: &BigInt) -> BigInt {
        let len = self.limbs.len().max(other.limbs.len());
        let mut result = Vec::with_capacity(len + 1);
        let mut carry: u64 = 0;
        for i in 0..len {
            let a = *self.limbs.get(i).unwrap_or(&0) as u64;
            let b = *other.limbs.get(i).unwrap_or(&0) as u64;
            let sum = a + b + carry;
            result.push((sum % LIMB_BASE) as u32);
            carry = sum / LIMB_BASE;
        }
        if carry > 0 {
            result.push(carry as u32);
        }
        BigInt::from_limbs(result)
    }

    /// `self - other`. Fails with [`BigIntError::NegativeResult`] if `other > self`.
    pub fn sub(&self, other: &BigInt) -> Result<BigInt> {
        if self.compare(other) == std::cmp::Ordering::Less {
            return Err(BigIntError::NegativeResult);
        }
        Ok(self.sub_unchecked(other))
    }

    /// Subtracts assuming `other <= self`; the caller is responsible for the invariant.
    pub(crate) fn sub_unchecked(&self, other: &BigInt) -> BigInt {
        let mut result = Vec::with_capacity(self.limbs.len());
        let mut borrow: i64 = 0;
        for i in 0..self.limbs.len() {
            let a = self.limbs[i] as i64;
            let b = *other.limbs.get(i).unwrap_or(&0) as i64;
            let mut diff = a - b - borrow;
            if diff < 0 {
                diff += LIMB_BASE as i64;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(diff as u32);
        }
        BigInt::from_limbs(result)
    }

    /// `self * other`, schoolbook O(n*m) with a 128-bit accumulator.
    pub fn mul(&self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }
        let mut acc = vec![0u128; self.limbs.len() + other.limbs.len()];
        for (i, &a) in self.limbs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.limbs.iter().enumerate() {
                acc[i + j] += a as u128 * b as u128;
            }
        }

        let mut result = Vec::with_capacity(acc.len() + 1);
        let mut carry: u128 = 0;
        let base = LIMB_BASE as u128;
        for val in acc {
            let cur = val + carry;
            result.push((cur % base) as u32);
            carry = cur / base;
        }
        while carry > 0 {
            result.push((carry % base) as u32);
            carry /= base;
        }
        BigInt::from_limbs(result)
    }

    /// `(a / b, a % b)` with `a = q*b + r`, `0 <= r < b`. Fails on `b == 0`.
    pub fn divmod(&self, other: &BigInt) -> Result<(BigInt, BigInt)> {
        if other.is_zero() {
            return Err(BigIntError::DivideByZero);
        }
        Ok(self.divmod_unchecked(other))
    }

    /// `self % other`. Fails on `other == 0`.
    pub fn rem(&self, other: &BigInt) -> Result<BigInt> {
        self.divmod(other).map(|(_, r)| r)
    }

    /// Long division assuming `other != 0`.
    ///
    /// Grade-school long division in base [`LIMB_BASE`]: each output limb is
    /// found by binary-searching the largest `q` in `[0, LIMB_BASE)` with
    /// `q * other <= remainder`.
    pub(crate) fn divmod_unchecked(&self, other: &BigInt) -> (BigInt, BigInt) {
        if self.compare(other) == std::cmp::Ordering::Less {
            return (BigInt::zero(), self.clone());
        }
        if other.limbs.len() == 1 {
            let (q, r) = self.divmod_small(other.limbs[0]);
            return (q, BigInt::from(r));
        }

        let mut remainder = BigInt::zero();
        let mut quotient_limbs = vec![0u32; self.limbs.len()];

        for i in (0..self.limbs.len()).rev() {
            remainder = remainder.shift_limbs(1).add(&BigInt::from(self.limbs[i]));

            let mut lo: u64 = 0;
            let mut hi: u64 = LIMB_BASE - 1;
            let mut best: u64 = 0;
            while lo <= hi {
                let mid = lo + (hi - lo) / 2;
                let candidate = other.mul_small(mid as u32);
                if candidate.compare(&remainder) != std::cmp::Ordering::Greater {
                    best = mid;
                    lo = mid + 1;
                } else {
                    if mid == 0 {
                        break;
                    }
                    hi = mid - 1;
                }
            }

            quotient_limbs[i] = best as u32;
            remainder = remainder.sub_unchecked(&other.mul_small(best as u32));
        }

        (BigInt::from_limbs(quotient_limbs), remainder)
    }
}
