//! Benchmarks for hashing and verification at default cost

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use password_hasher::{
    BytesComparer, BytesEqualityComparer, ConstantTimeComparer, HashAlgorithmKind, HasherOptions,
    PasswordHasher,
};

/// Hash and verify with each algorithm's default salt size and iterations
fn benchmark_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("password_hasher");
    group.sample_size(20);

    for algorithm in HashAlgorithmKind::ALL {
        let hasher = PasswordHasher::from_options(HasherOptions::new(algorithm))
            .expect("default options are valid");
        let stored = hasher.hash_password("benchmark password");

        group.bench_with_input(
            BenchmarkId::new("hash", algorithm),
            &hasher,
            |b, hasher| {
                b.iter(|| std::hint::black_box(hasher.hash_password("benchmark password")));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("verify", algorithm),
            &stored,
            |b, stored| {
                b.iter(|| {
                    let matched = hasher
                        .verify_hashed_password(stored, "benchmark password")
                        .expect("stored hash is well formed");
                    std::hint::black_box(matched);
                });
            },
        );
    }
    group.finish();
}

/// Compare the two comparers on equal-length inputs differing at the first byte
fn benchmark_comparers(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparer");
    let left = vec![0u8; 64];
    let mut right = left.clone();
    right[0] = 1;

    group.bench_function("sequential_early_mismatch", |b| {
        b.iter(|| {
            std::hint::black_box(
                BytesEqualityComparer.equals(Some(left.as_slice()), Some(right.as_slice())),
            )
        });
    });

    group.bench_function("constant_time_early_mismatch", |b| {
        b.iter(|| {
            std::hint::black_box(
                ConstantTimeComparer.equals(Some(left.as_slice()), Some(right.as_slice())),
            )
        });
    });
    group.finish();
}

criterion_group!(benches, benchmark_algorithms, benchmark_comparers);
criterion_main!(benches);
