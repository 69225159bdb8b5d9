//! Modular exponentiation, gcd, and modular inverse.

use crate::bigint::BigInt;
use crate::error::{BigIntError, Result};

/// A signed magnitude used only to carry the Bézout coefficients through
/// the extended Euclidean algorithm; never exposed outside this module.
#[derive(Clone)]
struct Signed {
    negative: bool,
    magnitude: BigInt,
}

impl Signed {
    fn from_bigint(value: BigInt) -> Self {
        Signed {
            negative: false,
            magnitude: value,
        }
    }

    fn negate(self) -> Self {
        if self.magnitude.is_zero() {
            self
        } else {
            Signed {
                negative: !self.negative,
                magnitude: self.magnitude,
            }
        }
    }

    fn add(&self, other: &Signed) -> Signed {
        if self.negative == other.negative {
            Signed {
                negative: self.negative,
                magnitude: self.magnitude.add(&other.magnitude),
            }
        } else if self.magnitude.compare(&other.magnitude) != std::cmp::Ordering::Less {
            let diff = self.magnitude.sub_unchecked(&other.magnitude);
            let negative = !diff.is_zero() && self.negative;
            Signed {
                negative,
                magnitude: diff,
            }
        } else {
            let diff = other.magnitude.sub_unchecked(&self.magnitude);
            Signed {
                negative: other.negative,
                magnitude: diff,
            }
        }
    }

    fn sub(&self, other: &Signed) -> Signed {
        self.add(&other.clone().negate())
    }

    fn mul(&self, other: &Signed) -> Signed {
        let magnitude = self.magnitude.mul(&other.magnitude);
        let negative = !magnitude.is_zero() && (self.negative != other.negative);
        Signed { negative, magnitude }
    }
}

impl BigInt {
    /// `base^exp mod modulus`, by repeated squaring while halving `exp`.
    ///
    /// Reduces every intermediate value modulo `modulus`. Returns `1` when
    /// `exp == 0` (including `0^0 == 1`). Fails with
    /// [`BigIntError::DivideByZero`] if `modulus == 0`.
    pub fn mod_pow(&self, exp: &BigInt, modulus: &BigInt) -> Result<BigInt> {
        if modulus.is_zero() {
            return Err(BigIntError::DivideByZero);
        }

        let mut result = BigInt::one();
        let mut base = self.divmod_unchecked(modulus).1;
        let mut e = exp.clone();

        while !e.is_zero() {
            if !e.is_even() {
                result = result.mul(&base).divmod_unchecked(modulus).1;
            }
            e = e.shift_right_one();
            base = base.mul(&base).divmod_unchecked(modulus).1;
        }

        Ok(result)
    }

    /// Greatest common divisor via the Euclidean algorithm.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        let (mut a, mut b) = (self.clone(), other.clone());
        while !b.is_zero() {
            let r = a.divmod_unchecked(&b).1;
            a = b;
            b = r;
        }
        a
    }

    /// The unique `x` in `[0, m)` with `a*x ≡ 1 (mod m)`.
    ///
    /// Fails with [`BigIntError::NoInverse`] if `gcd(a, m) != 1`, and with
    /// [`BigIntError::DivideByZero`] if `m == 0`.
    pub fn mod_inverse(&self, m: &BigInt) -> Result<BigInt> {
        if m.is_zero() {
            return Err(BigIntError::DivideByZero);
        }

        let mut old_r = self.clone();
        let mut r = m.clone();
        let mut old_s = Signed::from_bigint(BigInt::one());
        let mut s = Signed::from_bigint(BigInt::zero());

        while !r.is_zero() {
            let (q, rem) = old_r.divmod_unchecked(&r);
            old_r = r;
            r = rem;

            let qs = Signed::from_bigint(q).mul(&s);
            let new_s = old_s.sub(&qs);
            old_s = s;
            s = new_s;
        }

        if old_r != BigInt::one() {
            return Err(BigIntError::NoInverse);
        }

        let reduced = old_s.magnitude.divmod_unchecked(m).1;
        let result = if old_s.negative && !reduced.is_zero() {
            m.sub_unchecked(&reduced)
        } else {
            reduced
        };
        Ok(result)
    }
}
