//! Uniform random `BigInt` generation.

use rand::Rng;

use crate::bigint::BigInt;
use crate::error::{BigIntError, Result};

impl BigInt {
    /// A uniformly-drawn `BigInt` whose decimal length is exactly `digits`.
    ///
    /// The leading digit is drawn from `1..=9`, the remaining `digits - 1`
    /// from `0..=9`. Requires `digits >= 1`.
    pub fn random_with_digits<R: Rng + ?Sized>(rng: &mut R, digits: usize) -> Result<BigInt> {
        if digits == 0 {
            return Err(BigIntError::InvalidLength);
        }

        let mut s = String::with_capacity(digits);
        s.push(char::from(b'1' + rng.gen_range(0..9u8)));
        for _ in 1..digits {
            s.push(char::from(b'0' + rng.gen_range(0..10u8)));
        }

        // Parsing cannot fail: `s` is built entirely from ASCII digits.
        Ok(BigInt::parse(&s).expect("generated digits are always valid"))
    }

    /// A uniformly-drawn `BigInt` in `[0, bound)` via rejection sampling.
    ///
    /// `bound` must be non-zero.
    fn random_below<R: Rng + ?Sized>(rng: &mut R, bound: &BigInt) -> BigInt {
        debug_assert!(!bound.is_zero());
        let digits = bound.to_decimal().len();
        loop {
            let mut s = String::with_capacity(digits);
            for _ in 0..digits {
                s.push(char::from(b'0' + rng.gen_range(0..10u8)));
            }
            let candidate = BigInt::parse(&s).expect("generated digits are always valid");
            if candidate.compare(bound) == std::cmp::Ordering::Less {
                return candidate;
            }
        }
    }

    /// A uniformly-drawn `BigInt` in `[lo, hi)`. Fails with
    /// [`BigIntError::EmptyRange`] if `lo >= hi`.
    pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, lo: &BigInt, hi: &BigInt) -> Result<BigInt> {
        if lo.compare(hi) != std::cmp::Ordering::Less {
            return Err(BigIntError::EmptyRange);
        }
        let range = hi.sub_unchecked(lo);
        Ok(lo.add(&BigInt::random_below(rng, &range)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_with_digits_has_exact_length_and_no_leading_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        for digits in 1..=12 {
            let n = BigInt::random_with_digits(&mut rng, digits).unwrap();
            assert_eq!(n.to_decimal().len(), digits);
            assert_ne!(&n.to_decimal()[0..1], "0");
        }
    }

    #[test]
    fn random_with_digits_rejects_zero_length() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            BigInt::random_with_digits(&mut rng, 0),
            Err(BigIntError::InvalidLength)
        );
    }

    #[test]
    fn random_in_range_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(99);
        let lo = BigInt::from(10u32);
        let hi = BigInt::from(20u32);
        for _ in 0..200 {
            let v = BigInt::random_in_range(&mut rng, &lo, &hi).unwrap();
            assert!(v.compare(&lo) != std::cmp::Ordering::Less);
            assert!(v.compare(&hi) == std::cmp::Ordering::Less);
        }
    }

    #[test]
    fn random_in_range_rejects_empty_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = BigInt::from(5u32);
        assert_eq!(
            BigInt::random_in_range(&mut rng, &a, &a),
            Err(BigIntError::EmptyRange)
        );
    }
}
