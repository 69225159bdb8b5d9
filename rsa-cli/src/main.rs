//! `rsa`: command-line frontend for the from-scratch RSA cryptosystem.
//!
//! `rsalib` (the `bigint`/`prime-gen`/`rsa-core` crates) provides RSA
//! encryption, decryption, key generation and prime generation. This binary
//! is a thin adapter: it parses arguments, calls into the core, and maps
//! results/errors onto exit codes.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use bigint::BigInt;
use rsa_core::Key;

/// Digit length `encrypt` uses when the caller doesn't supply one.
const DEFAULT_ENCRYPT_DIGITS: usize = 50;
/// Miller-Rabin round count used when the caller doesn't supply one.
const DEFAULT_ITERATIONS: u32 = prime_gen::DEFAULT_ITERATIONS;

#[derive(Parser)]
#[command(
    name = "rsa",
    version,
    about = "rsa is a command-line frontend to rsalib. rsalib provides RSA encryption, decryption and key/prime generation.",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate and print an RSA key pair LENGTH digits long
    Genkey {
        length: usize,
        iterations: Option<u32>,
    },
    /// Generate and print a prime number LENGTH digits long
    Genprime {
        length: usize,
        iterations: Option<u32>,
    },
    /// Generate a fresh key pair and encrypt MESSAGE under it
    ///
    /// Usage: encrypt [LENGTH] MESSAGE
    Encrypt {
        #[arg(num_args = 1..=2)]
        args: Vec<String>,
    },
    /// Decrypt CIPHER using modulus N and private exponent D
    Decrypt { cipher: String, n: String, d: String },
    /// Run the bundled smoke tests
    Test,
}

fn usage_banner() -> &'static str {
    "Usage: rsa [OPTION] [ARGUMENT]\n\
     rsa is a command-line frontend to rsalib. rsalib provides RSA encryption,\n\
     decryption and key/prime generation.\n\
     \n\
     Available options:\n\
     \n\
     \x20   genkey LENGTH [N]\n\
     Generate and print a RSA key. The generated key is LENGTH digits long and\n\
     is generated in N iterations (default N = 3 is fine). LENGTH and N must be\n\
     positive decimal integers.\n\
     \n\
     \x20   genprime LENGTH [N]\n\
     Generate and print a prime number. The generated prime is LENGTH digits\n\
     long and is generated in N iterations (default N = 3 is fine).\n\
     \n\
     \x20   encrypt [LENGTH] MESSAGE\n\
     Generate a fresh key pair and encrypt MESSAGE under it. LENGTH defaults to\n\
     50 digits.\n\
     \n\
     \x20   decrypt CIPHER N D\n\
     Decrypt CIPHER using modulus N and private exponent D.\n\
     \n\
     \x20   test\n\
     Run preconfigured tests.\n\
     \n\
     Exit status is 0 if OK, otherwise not 0."
}

fn exit_error(message: &str) -> ! {
    println!("{message}");
    println!();
    println!("{}", usage_banner());
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Genkey { length, iterations } => genkey(length, iterations),
        Command::Genprime { length, iterations } => genprime(length, iterations),
        Command::Encrypt { args } => encrypt_cmd(args),
        Command::Decrypt { cipher, n, d } => decrypt_cmd(&cipher, &n, &d),
        Command::Test => run_tests(),
    }
}

fn genkey(length: usize, iterations: Option<u32>) {
    let iterations = iterations.unwrap_or(DEFAULT_ITERATIONS);
    let mut rng = StdRng::from_entropy();
    match rsa_core::generate_key_pair(&mut rng, length, iterations) {
        Ok(pair) => println!("{pair}"),
        Err(err) => exit_error(&err.to_string()),
    }
}

fn genprime(length: usize, iterations: Option<u32>) {
    let iterations = iterations.unwrap_or(DEFAULT_ITERATIONS);
    let mut rng = StdRng::from_entropy();
    match prime_gen::generate(&mut rng, length, iterations) {
        Ok(prime) => println!("{prime}"),
        Err(err) => exit_error(&err.to_string()),
    }
}

fn encrypt_cmd(args: Vec<String>) {
    let (length, message) = match args.as_slice() {
        [message] => (DEFAULT_ENCRYPT_DIGITS, message.clone()),
        [length, message] => {
            let length: usize = match length.parse() {
                Ok(l) if l > 0 => l,
                _ => exit_error("'LENGTH' must be a positive integer."),
            };
            (length, message.clone())
        }
        _ => exit_error("Missing argument: 'MESSAGE'."),
    };

    let mut rng = StdRng::from_entropy();
    let pair = match rsa_core::generate_key_pair(&mut rng, length, DEFAULT_ITERATIONS) {
        Ok(pair) => pair,
        Err(err) => exit_error(&err.to_string()),
    };

    println!("{pair}");
    println!();
    match rsa_core::encrypt(message.as_bytes(), &pair.public_key()) {
        Ok(cipher) => println!("{cipher}"),
        Err(err) => exit_error(&err.to_string()),
    }
}

fn decrypt_cmd(cipher: &str, n: &str, d: &str) {
    let n = match BigInt::parse(n) {
        Ok(n) => n,
        Err(_) => exit_error("'N' must be a positive decimal integer."),
    };
    let d = match BigInt::parse(d) {
        Ok(d) => d,
        Err(_) => exit_error("'D' must be a positive decimal integer."),
    };

    let private_key = Key::new(n, d);
    match rsa_core::decrypt(cipher, &private_key) {
        Ok(plaintext) => match String::from_utf8(plaintext) {
            Ok(text) => println!("{text}"),
            Err(err) => println!("{:?}", err.into_bytes()),
        },
        Err(err) => exit_error(&err.to_string()),
    }
}

fn run_tests() {
    if let Err(message) = smoke_tests() {
        exit_error(&message);
    }
    println!("All tests passed.");
}

/// A convenience runner over the same assertions `cargo test` exercises;
/// not a substitute for the crate-level test suites.
fn smoke_tests() -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(0);

    // BigInt operator correctness.
    let a = BigInt::parse("123456789012345678901234567890").map_err(|e| e.to_string())?;
    let b = BigInt::parse("98765432109876543210").map_err(|e| e.to_string())?;
    if a.add(&b) != b.add(&a) {
        return Err("BigInt::add is not commutative".into());
    }
    if a.mul(&b) != b.mul(&a) {
        return Err("BigInt::mul is not commutative".into());
    }

    // Factorial benchmark: stress repeated multiplication.
    let mut factorial = BigInt::one();
    for i in 2..=200u32 {
        factorial = factorial.mul(&BigInt::from(i));
    }
    if factorial.is_zero() {
        return Err("factorial(200) collapsed to zero".into());
    }

    // Uniform random BigInt generation.
    let random_value = BigInt::random_with_digits(&mut rng, 12).map_err(|e| e.to_string())?;
    if random_value.to_decimal().len() != 12 {
        return Err("random_with_digits did not produce exactly 12 digits".into());
    }

    // Random division.
    let (q, r) = a.divmod(&b).map_err(|e| e.to_string())?;
    if q.mul(&b).add(&r) != a {
        return Err("divmod does not satisfy a = q*b + r".into());
    }

    // Prime generation smoke test.
    let prime = prime_gen::generate(&mut rng, 4, 10).map_err(|e| e.to_string())?;
    if prime.to_decimal().len() != 4 {
        return Err("genprime did not produce a 4-digit prime".into());
    }

    // Key generation smoke test.
    let pair = rsa_core::generate_key_pair(&mut rng, 8, 8).map_err(|e| e.to_string())?;

    // Encrypt/decrypt round trip on a string.
    let cipher = rsa_core::encrypt(b"Hello", &pair.public_key()).map_err(|e| e.to_string())?;
    let plain = rsa_core::decrypt(&cipher, &pair.private_key()).map_err(|e| e.to_string())?;
    if plain != b"Hello" {
        return Err("encrypt/decrypt round trip on a string failed".into());
    }

    // Encrypt/decrypt round trip on a file.
    let dir = std::env::temp_dir().join(format!("rsa-cli-selftest-{}", std::process::id()));
    std::fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    let input_path: PathBuf = dir.join("plain.txt");
    let output_path: PathBuf = dir.join("plain.out");
    std::fs::write(&input_path, b"round trip through a file").map_err(|e| e.to_string())?;

    let file_cipher = rsa_core::encrypt_file(&input_path, &pair.public_key()).map_err(|e| e.to_string())?;
    rsa_core::decrypt_file(&file_cipher, &pair.private_key(), &output_path).map_err(|e| e.to_string())?;
    let recovered = std::fs::read(&output_path).map_err(|e| e.to_string())?;
    std::fs::remove_dir_all(&dir).ok();
    if recovered != b"round trip through a file" {
        return Err("encrypt/decrypt round trip on a file failed".into());
    }

    Ok(())
}
