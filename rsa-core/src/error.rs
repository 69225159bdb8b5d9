//! Error types surfaced by [`crate::key`] and [`crate::rsa`].

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RsaError {
    #[error(transparent)]
    BigInt(#[from] bigint::BigIntError),

    #[error(transparent)]
    PrimeGen(#[from] prime_gen::PrimeGenError),

    #[error("modulus is too small to encode even a single byte")]
    ModulusTooSmall,

    #[error("malformed ciphertext: {0}")]
    MalformedCiphertext(String),

    #[error("message is too large to encode a length header")]
    MessageTooLarge,

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for RsaError {
    fn from(err: std::io::Error) -> Self {
        RsaError::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RsaError>;
