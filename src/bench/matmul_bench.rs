use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use densemul::{Matrix, multiply};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng, n: usize) -> Matrix {
    Matrix::from_fn(n, |_, _| rng.gen_range(-100..100))
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    let mut rng = StdRng::seed_from_u64(42);

    for size in [64, 128, 256] {
        let a = random_matrix(&mut rng, size);
        let b = random_matrix(&mut rng, size);
        let mut out = Matrix::zeros(size);

        group.throughput(Throughput::Elements((2 * size * size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| multiply(black_box(&a), black_box(&b), &mut out))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiply);
criterion_main!(benches);
