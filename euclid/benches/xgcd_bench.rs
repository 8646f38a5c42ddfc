use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use euclid::{compute_extended_gcd, mod_inverse, solve_crt, Congruence};
use rand::{distributions::Uniform, thread_rng, Rng};

pub fn criterion_benchmark(c: &mut Criterion) {
    let modulus = 132120577i64;
    let mut rng = thread_rng();
    let dis = Uniform::new(1, modulus);

    c.bench_function("xgcd", |b| {
        b.iter_batched(
            || rng.sample(dis),
            |v| compute_extended_gcd(black_box(modulus), black_box(v)),
            BatchSize::SmallInput,
        );
    });

    c.bench_function("mod_inverse", |b| {
        b.iter_batched(
            || rng.sample(dis),
            |v| mod_inverse(black_box(v), black_box(modulus)),
            BatchSize::SmallInput,
        );
    });

    c.bench_function("solve_crt", |b| {
        b.iter_batched(
            || {
                [
                    Congruence::new(rng.gen_range(0..17), 17).unwrap(),
                    Congruence::new(rng.gen_range(0..27), 27).unwrap(),
                    Congruence::new(rng.gen_range(0..10), 10).unwrap(),
                ]
            },
            |congruences| solve_crt(black_box(&congruences)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
