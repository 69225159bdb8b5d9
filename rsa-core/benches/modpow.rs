//! Benchmarks for the factorial stress test and `mod_pow` cost curve
//! described alongside the rest of the test suite.

use bigint::BigInt;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn factorial(n: u32) -> BigInt {
    let mut acc = BigInt::one();
    for i in 2..=n {
        acc = acc.mul(&BigInt::from(i));
    }
    acc
}

fn bench_factorial(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorial");
    for &n in &[20u32, 100, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| factorial(black_box(n)));
        });
    }
    group.finish();
}

fn bench_mod_pow(c: &mut Criterion) {
    let n = BigInt::parse("8779729366368912127").unwrap();
    let base = BigInt::parse("123456789012345").unwrap();
    let exp = BigInt::parse("998877665544332211").unwrap();

    c.bench_function("mod_pow_19_digit_modulus", |b| {
        b.iter(|| black_box(&base).mod_pow(black_box(&exp), black_box(&n)).unwrap());
    });
}

criterion_group!(benches, bench_factorial, bench_mod_pow);
criterion_main!(benches);
