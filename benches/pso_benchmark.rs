use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fastrand::Rng;
use swarmin::{
    algorithms::particles::{PSOConfig, PSO},
    test_functions::{Rastrigin, Rosenbrock},
};

fn pso_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pso");
    for n in [2, 5, 10, 20] {
        group.bench_with_input(BenchmarkId::new("Rosenbrock", n), &n, |b, ndim| {
            b.iter(|| {
                let config = PSOConfig::new(vec![5.0; *ndim])
                    .setup(|c| c.with_n_particles(30).with_max_steps(200));
                let mut pso = PSO::new(config, Rng::with_seed(0)).unwrap();
                pso.run(&Rosenbrock { n: *ndim }, &mut ()).unwrap();
            });
        });
        group.bench_with_input(BenchmarkId::new("Rastrigin (bounded)", n), &n, |b, ndim| {
            b.iter(|| {
                let config = PSOConfig::new(vec![3.0; *ndim]).setup(|c| {
                    c.with_bounds(vec![(-5.12, 5.12); *ndim])
                        .with_n_particles(30)
                        .with_max_steps(200)
                });
                let mut pso = PSO::new(config, Rng::with_seed(0)).unwrap();
                pso.run(&Rastrigin { n: *ndim }, &mut ()).unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, pso_benchmark);
criterion_main!(benches);
