use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use math_audio_dense::ops::unit_vector;
use math_audio_dense::{gauss_jordan_inverse, lu_factorize, lu_inverse, lu_solve};
use ndarray::Array2;

/// Diagonally dominant test matrix with a deterministic fill
fn test_matrix(n: usize) -> Array2<f64> {
    Array2::from_shape_fn((n, n), |(i, j)| {
        if i == j {
            2.0 * n as f64
        } else {
            ((i * 7 + j * 13) % 11) as f64 / 11.0 - 0.5
        }
    })
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");

    for n in [8, 32, 96] {
        let a = test_matrix(n);

        group.bench_with_input(BenchmarkId::new("lu_reuse", n), &a, |b, a| {
            b.iter(|| lu_inverse(black_box(a)).unwrap())
        });

        // One full factorization per column
        group.bench_with_input(BenchmarkId::new("lu_refactor", n), &a, |b, a| {
            b.iter(|| {
                for k in 0..n {
                    black_box(lu_solve(a, &unit_vector(n, k)).unwrap());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("gauss_jordan", n), &a, |b, a| {
            b.iter(|| gauss_jordan_inverse(black_box(a)).unwrap())
        });
    }

    group.finish();
}

fn bench_factorize(c: &mut Criterion) {
    let a = test_matrix(64);

    c.bench_function("lu_factorize_64", |b| {
        b.iter(|| lu_factorize(black_box(&a)).unwrap())
    });

    let f = lu_factorize(&a).unwrap();
    let rhs = unit_vector(64, 3);
    c.bench_function("lu_resolve_64", |b| {
        b.iter(|| f.solve(black_box(&rhs)).unwrap())
    });
}

criterion_group!(benches, bench_inverse, bench_factorize);
criterion_main!(benches);
