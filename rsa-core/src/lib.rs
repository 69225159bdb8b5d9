//! RSA key pairs and block-wise encryption/decryption over the from-scratch
//! `bigint`/`prime-gen` stack.

mod error;
mod key;
mod rsa;

pub use error::{Result, RsaError};
pub use key::{Key, KeyPair};
pub use rsa::{decrypt, decrypt_file, encrypt, encrypt_file, generate_key_pair};
