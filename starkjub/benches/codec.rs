use criterion::{criterion_group, criterion_main, Criterion};
use num_bigint::RandBigInt;
use starkjub::arithmetic::modular;
use starkjub::parse::parse_decimal;
use starkjub::{decompress, BigUint, Curve, STARKJUB_SAMPLE_X, STARKJUB_SAMPLE_Y};

use rand::rngs::OsRng;
use rand::Rng;

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let mut rng = OsRng;
    let curve = Curve::new();
    let x = parse_decimal(STARKJUB_SAMPLE_X).unwrap();
    let y = parse_decimal(STARKJUB_SAMPLE_Y).unwrap();
    let point = curve.point(x, y).unwrap();
    let compressed = point.compress();

    let n = 50_usize;
    let random_elements = (0..n)
        .map(|_| rng.gen_biguint_below(curve.modulus()))
        .collect::<Vec<BigUint>>();

    group.bench_function("compress", |b| b.iter(|| point.compress()));

    group.bench_function("decompress", |b| {
        b.iter(|| decompress(&compressed, &curve).unwrap())
    });

    group.bench_function("inverse", |b| {
        let i = rng.gen_range(0..n);
        b.iter(|| modular::invert(&random_elements[i], curve.modulus()))
    });

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
