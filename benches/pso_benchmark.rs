use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fastrand::Rng;
use pswarm::core::Bounds;
use pswarm::swarm::SwarmOptimizer;
use pswarm::test_functions::Rastrigin;

fn pso_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("PSO");
    for n in [2, 3, 4, 5] {
        group.bench_with_input(BenchmarkId::new("Rastrigin", n), &n, |b, ndim| {
            let problem = Rastrigin { n: *ndim };
            let bounds = Bounds::new(vec![-5.12; *ndim], vec![5.12; *ndim]).unwrap();
            b.iter(|| {
                let mut opt = SwarmOptimizer::new(bounds.clone(), Rng::with_seed(0))
                    .with_swarm_size(50)
                    .with_max_iterations(100)
                    .with_convergence_threshold(0.0);
                let summary = opt.optimize(&problem, &mut ()).unwrap();
                black_box(summary);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, pso_benchmark);
criterion_main!(benches);
