//! RSA key generation and block-wise encryption/decryption.

use std::cmp::Ordering;
use std::path::Path;

use bigint::BigInt;
use rand::Rng;

use crate::error::{Result, RsaError};
use crate::key::{Key, KeyPair};

/// Generates an RSA key pair whose modulus has at least `digits` decimal digits.
///
/// Draws two distinct primes, each of `ceil(digits / 2)` decimal digits, so
/// that their product has at least `digits` digits. The public exponent
/// starts from 65537 (or 3, if 65537 would not be smaller than `phi`) and is
/// incremented by two until it is coprime to `phi`.
pub fn generate_key_pair<R: Rng + ?Sized>(rng: &mut R, digits: usize, iterations: u32) -> Result<KeyPair> {
    let half = digits.div_ceil(2);

    let p = prime_gen::generate(rng, half, iterations)?;
    let q = loop {
        let candidate = prime_gen::generate(rng, half, iterations)?;
        if candidate != p {
            break candidate;
        }
    };

    let n = p.mul(&q);
    let one = BigInt::one();
    let p_minus_one = p.sub(&one).expect("p >= 2");
    let q_minus_one = q.sub(&one).expect("q >= 2");
    let phi = p_minus_one.mul(&q_minus_one);

    let candidate_e = BigInt::from(65537u32);
    let mut e = if candidate_e.compare(&phi) == Ordering::Less {
        candidate_e
    } else {
        BigInt::from(3u32)
    };
    let two = BigInt::from(2u32);
    while e.gcd(&phi) != one {
        e = e.add(&two);
    }

    let d = e.mod_inverse(&phi)?;

    Ok(KeyPair::new(n, e, d))
}

/// The largest `w` such that `256^w < n`: every `w`-byte big-endian block is
/// then guaranteed to be strictly less than `n`.
fn block_width(n: &BigInt) -> usize {
    let base = BigInt::from(256u32);
    let mut power = BigInt::one();
    let mut width = 0usize;
    loop {
        let next = power.mul(&base);
        if next.compare(n) == Ordering::Less {
            power = next;
            width += 1;
        } else {
            break;
        }
    }
    width
}

/// Prepends a 4-byte big-endian length header to `payload`, then zero-pads
/// to a multiple of `width` bytes. This is how encrypt/decrypt agree on
/// where the real message ends within the final, zero-padded block.
fn frame(payload: &[u8], width: usize) -> Result<Vec<u8>> {
    if payload.len() > u32::MAX as usize {
        return Err(RsaError::MessageTooLarge);
    }

    let mut buf = Vec::with_capacity(4 + payload.len());
    buf.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    buf.extend_from_slice(payload);

    let remainder = buf.len() % width;
    if remainder != 0 {
        buf.resize(buf.len() + (width - remainder), 0);
    }
    Ok(buf)
}

fn unframe(buf: &[u8]) -> Result<Vec<u8>> {
    if buf.len() < 4 {
        return Err(RsaError::MalformedCiphertext("missing length header".into()));
    }
    let len = u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]) as usize;
    let payload = &buf[4..];
    if len > payload.len() {
        return Err(RsaError::MalformedCiphertext(
            "length header exceeds decoded payload".into(),
        ));
    }
    Ok(payload[..len].to_vec())
}

/// Encrypts `message` under `public_key`, returning cipher blocks as decimal
/// integers separated by single spaces, in block order.
pub fn encrypt(message: &[u8], public_key: &Key) -> Result<String> {
    let n = public_key.modulus();
    let e = public_key.exponent();

    let width = block_width(n);
    if width == 0 {
        return Err(RsaError::ModulusTooSmall);
    }

    let framed = frame(message, width)?;

    let mut tokens = Vec::with_capacity(framed.len() / width);
    for chunk in framed.chunks(width) {
        let m = BigInt::from_be_bytes(chunk);
        let c = m.mod_pow(e, n)?;
        tokens.push(c.to_decimal());
    }

    Ok(tokens.join(" "))
}

/// Decrypts a space-separated decimal ciphertext under `private_key`.
/// A trailing space in `cipher` is tolerated.
pub fn decrypt(cipher: &str, private_key: &Key) -> Result<Vec<u8>> {
    let n = private_key.modulus();
    let d = private_key.exponent();

    let width = block_width(n);
    if width == 0 {
        return Err(RsaError::ModulusTooSmall);
    }

    let mut buf = Vec::new();
    for token in cipher.split_whitespace() {
        let c = BigInt::parse(token)
            .map_err(|_| RsaError::MalformedCiphertext(format!("'{token}' is not a decimal integer")))?;
        let m = c.mod_pow(d, n)?;
        let bytes = m
            .to_be_bytes_padded(width)
            .ok_or_else(|| RsaError::MalformedCiphertext("decrypted block exceeds block width".into()))?;
        buf.extend(bytes);
    }

    unframe(&buf)
}

/// Reads `path`, encrypts its bytes under `public_key`.
pub fn encrypt_file(path: &Path, public_key: &Key) -> Result<String> {
    let data = std::fs::read(path)?;
    encrypt(&data, public_key)
}

/// Decrypts `cipher` under `private_key`, writing the plaintext bytes to `out_path`.
pub fn decrypt_file(cipher: &str, private_key: &Key, out_path: &Path) -> Result<()> {
    let plaintext = decrypt(cipher, private_key)?;
    std::fs::write(out_path, plaintext)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn key_generation_produces_valid_small_key_pair() {
        let mut rng = StdRng::seed_from_u64(1);
        let pair = generate_key_pair(&mut rng, 4, 5).unwrap();

        let n = pair.modulus().clone();
        assert!(n.to_decimal().len() >= 4);

        let e = pair.public_key().exponent().clone();
        let d = pair.private_key().exponent().clone();
        // e*d mod phi == 1 is checked indirectly: encrypting then decrypting
        // any message below n must be the identity.
        let message = BigInt::from(7u32);
        let enc = message.mod_pow(&e, &n).unwrap();
        let dec = enc.mod_pow(&d, &n).unwrap();
        assert_eq!(dec, message);
    }

    #[test]
    fn known_textbook_rsa_vector() {
        let public = Key::new(BigInt::from(3233u32), BigInt::from(17u32));
        let private = Key::new(BigInt::from(3233u32), BigInt::from(2753u32));

        let m = BigInt::from(65u32);
        let c = m.mod_pow(public.exponent(), public.modulus()).unwrap();
        assert_eq!(c.to_decimal(), "2790");

        let recovered = c.mod_pow(private.exponent(), private.modulus()).unwrap();
        assert_eq!(recovered, m);
    }

    #[test]
    fn encrypt_decrypt_round_trip_on_strings() {
        let mut rng = StdRng::seed_from_u64(2);
        let pair = generate_key_pair(&mut rng, 12, 5).unwrap();

        for message in ["Hello", "", "a", "RSA from scratch, no padding schemes here."] {
            let cipher = encrypt(message.as_bytes(), &pair.public_key()).unwrap();
            let plain = decrypt(&cipher, &pair.private_key()).unwrap();
            assert_eq!(plain, message.as_bytes());
        }
    }

    #[test]
    fn encrypt_decrypt_round_trip_preserves_trailing_zero_bytes() {
        let mut rng = StdRng::seed_from_u64(3);
        let pair = generate_key_pair(&mut rng, 12, 5).unwrap();

        let message = [1u8, 2, 3, 0, 0, 0];
        let cipher = encrypt(&message, &pair.public_key()).unwrap();
        let plain = decrypt(&cipher, &pair.private_key()).unwrap();
        assert_eq!(plain, message);
    }

    #[test]
    fn cipher_blocks_preserve_plaintext_block_order() {
        let mut rng = StdRng::seed_from_u64(4);
        let pair = generate_key_pair(&mut rng, 12, 5).unwrap();
        let message = b"each block stays in its original order";
        let cipher = encrypt(message, &pair.public_key()).unwrap();
        assert!(cipher.split_whitespace().count() >= 2);
        let plain = decrypt(&cipher, &pair.private_key()).unwrap();
        assert_eq!(plain, message);
    }

    #[test]
    fn decrypt_tolerates_trailing_whitespace() {
        let mut rng = StdRng::seed_from_u64(5);
        let pair = generate_key_pair(&mut rng, 12, 5).unwrap();
        let cipher = encrypt(b"trailing space", &pair.public_key()).unwrap();
        let padded = format!("{cipher} ");
        let plain = decrypt(&padded, &pair.private_key()).unwrap();
        assert_eq!(plain, b"trailing space");
    }

    #[test]
    fn decrypt_rejects_malformed_tokens() {
        let mut rng = StdRng::seed_from_u64(6);
        let pair = generate_key_pair(&mut rng, 12, 5).unwrap();
        let err = decrypt("not-a-number", &pair.private_key()).unwrap_err();
        assert!(matches!(err, RsaError::MalformedCiphertext(_)));
    }

    #[test]
    fn file_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        let pair = generate_key_pair(&mut rng, 12, 5).unwrap();

        let dir = std::env::temp_dir().join(format!("rsa-core-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input_path = dir.join("plain.txt");
        let output_path = dir.join("plain.out");
        std::fs::write(&input_path, b"file contents for RSA round trip").unwrap();

        let cipher = encrypt_file(&input_path, &pair.public_key()).unwrap();
        decrypt_file(&cipher, &pair.private_key(), &output_path).unwrap();

        let recovered = std::fs::read(&output_path).unwrap();
        assert_eq!(recovered, b"file contents for RSA round trip");

        std::fs::remove_dir_all(&dir).ok();
    }
}
