//! [`Key`] and [`KeyPair`] value types.

use std::fmt;

use bigint::BigInt;

/// A modulus paired with an exponent. Carries no tag distinguishing public
/// from private; the distinction is contextual.
#[derive(Clone, PartialEq, Eq)]
pub struct Key {
    n: BigInt,
    x: BigInt,
}

impl Key {
    pub fn new(n: BigInt, x: BigInt) -> Self {
        Key { n, x }
    }

    pub fn modulus(&self) -> &BigInt {
        &self.n
    }

    pub fn exponent(&self) -> &BigInt {
        &self.x
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.n, self.x)
    }
}

/// `(n, e, d)` produced atomically by RSA key generation.
///
/// Invariants: `n = p*q` for distinct primes `p, q`; `0 < e < phi(n)`;
/// `0 < d < phi(n)`; `(e*d) mod phi(n) == 1`.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    n: BigInt,
    e: BigInt,
    d: BigInt,
}

impl KeyPair {
    pub(crate) fn new(n: BigInt, e: BigInt, d: BigInt) -> Self {
        KeyPair { n, e, d }
    }

    pub fn public_key(&self) -> Key {
        Key::new(self.n.clone(), self.e.clone())
    }

    pub fn private_key(&self) -> Key {
        Key::new(self.n.clone(), self.d.clone())
    }

    pub fn modulus(&self) -> &BigInt {
        &self.n
    }
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Public key:  {} {}", self.n, self.e)?;
        write!(f, "Private key: {} {}", self.n, self.d)
    }
}
