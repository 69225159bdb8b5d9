//! Probabilistic prime generation over the [`bigint::BigInt`] engine.

mod error;
mod miller_rabin;

pub use error::{PrimeGenError, Result};

use bigint::BigInt;
use rand::Rng;

/// Default number of Miller-Rabin rounds, matching the CLI's historical default.
pub const DEFAULT_ITERATIONS: u32 = 3;

/// Draws random odd candidates of exactly `digits` decimal digits and
/// returns the first one that passes `iterations` rounds of Miller-Rabin.
///
/// If a candidate's `+2` successor grows past `digits` digits, a fresh
/// candidate is redrawn from scratch rather than carried over.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, digits: usize, iterations: u32) -> Result<BigInt> {
    if digits == 0 {
        return Err(PrimeGenError::InvalidLength);
    }
    if iterations == 0 {
        return Err(PrimeGenError::InvalidIterations);
    }

    let two = BigInt::from(2u32);

    loop {
        let mut candidate = BigInt::random_with_digits(rng, digits)
            .expect("digits >= 1 was checked above");
        if candidate.is_even() {
            candidate = candidate.add(&BigInt::one());
        }

        loop {
            if candidate.to_decimal().len() != digits {
                break; // candidate grew past `digits` digits; redraw from scratch
            }
            if miller_rabin::is_probably_prime(&candidate, iterations, rng) {
                return Ok(candidate);
            }
            candidate = candidate.add(&two);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_invalid_parameters() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate(&mut rng, 0, 3), Err(PrimeGenError::InvalidLength));
        assert_eq!(generate(&mut rng, 3, 0), Err(PrimeGenError::InvalidIterations));
    }

    #[test]
    fn single_digit_prime() {
        let mut rng = StdRng::seed_from_u64(5);
        let p = generate(&mut rng, 1, DEFAULT_ITERATIONS).unwrap();
        let decimal = p.to_decimal();
        assert_eq!(decimal.len(), 1);
        assert!(["2", "3", "5", "7"].contains(&decimal.as_str()));
    }

    #[test]
    fn three_digit_prime_in_range() {
        let mut rng = StdRng::seed_from_u64(10);
        let p = generate(&mut rng, 3, 10).unwrap();
        assert_eq!(p.to_decimal().len(), 3);
        let value: u32 = p.to_decimal().parse().unwrap();
        assert!((100..=999).contains(&value));
        assert!(is_reference_prime(value));
    }

    #[test]
    fn generated_primes_have_no_small_factors() {
        let mut rng = StdRng::seed_from_u64(123);
        for _ in 0..5 {
            let p = generate(&mut rng, 4, 8).unwrap();
            let value: u64 = p.to_decimal().parse().unwrap();
            for k in 2u64..100 {
                if k < value {
                    assert_ne!(value % k, 0, "{value} divisible by {k}");
                }
            }
        }
    }

    fn is_reference_prime(n: u32) -> bool {
        if n < 2 {
            return false;
        }
        let mut d = 2;
        while d * d <= n {
            if n % d == 0 {
                return false;
            }
            d += 1;
        }
        true
    }
}
