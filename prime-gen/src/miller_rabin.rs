//! The Miller-Rabin probabilistic primality test.

use bigint::BigInt;
use rand::Rng;

/// Runs `iterations` rounds of Miller-Rabin against `p`.
///
/// `p` is declared probably prime if every round passes. Small values
/// (`< 4`) and even numbers are handled directly without drawing a witness.
pub(crate) fn is_probably_prime<R: Rng + ?Sized>(p: &BigInt, iterations: u32, rng: &mut R) -> bool {
    let two = BigInt::from(2u32);
    let three = BigInt::from(3u32);

    if p.compare(&two) == std::cmp::Ordering::Less {
        return false;
    }
    if *p == two || *p == three {
        return true;
    }
    if p.is_even() {
        return false;
    }

    // p - 1 = 2^s * d, d odd.
    let one = BigInt::one();
    let p_minus_one = p.sub(&one).expect("p >= 2 so p - 1 is non-negative");
    let mut d = p_minus_one.clone();
    let mut s: u32 = 0;
    while d.is_even() {
        d = d.shift_right_one();
        s += 1;
    }

    // Witnesses are drawn from [2, p-2], i.e. the half-open range [2, p-1).
    'rounds: for _ in 0..iterations {
        let a = BigInt::random_in_range(rng, &two, &p_minus_one)
            .expect("p > 4 here so [2, p-1) is non-empty");
        let mut x = a.mod_pow(&d, p).expect("p != 0");

        if x == one || x == p_minus_one {
            continue;
        }

        for _ in 0..s.saturating_sub(1) {
            x = x.mod_pow(&two, p).expect("p != 0");
            if x == p_minus_one {
                continue 'rounds;
            }
        }

        return false;
    }

    true
}
