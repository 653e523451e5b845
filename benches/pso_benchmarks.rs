//! Benchmarks for the forward pass, fitness evaluation and short swarm runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use pso_classifier::data::{generate_colors, synthetic::REFERENCE_WEIGHTS, TrainingExample};
use pso_classifier::network::{NeuralNetwork, Topology};
use pso_classifier::swarm::{CrossEntropy, FitnessFunction, NullReporter, ParticleSwarm, PsoParams};

fn color_examples(count: usize) -> Vec<TrainingExample> {
    let mut rng = StdRng::seed_from_u64(159);
    generate_colors(count, &mut rng)
        .expect("reference network is valid")
        .iter()
        .map(|s| s.to_example())
        .collect()
}

fn bench_forward(c: &mut Criterion) {
    let topology = Topology::new(4, 5, 3).unwrap();
    let mut network = NeuralNetwork::with_weights(topology, &REFERENCE_WEIGHTS).unwrap();
    let inputs = [0.25, -0.5, 1.0, -1.0];

    c.bench_function("forward_4_5_3", |b| {
        b.iter(|| {
            let out = network.forward(black_box(&inputs)).unwrap();
            black_box(out[0])
        })
    });
}

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_entropy");
    let topology = Topology::new(4, 5, 3).unwrap();

    for rows in [80usize, 800] {
        let examples = color_examples(rows);
        let mut objective = CrossEntropy::new(topology, &examples);
        group.bench_with_input(BenchmarkId::new("rows", rows), &rows, |b, _| {
            b.iter(|| objective.fitness(black_box(&REFERENCE_WEIGHTS)).unwrap())
        });
    }

    group.finish();
}

fn bench_swarm(c: &mut Criterion) {
    let mut group = c.benchmark_group("swarm");
    group.sample_size(10);
    let topology = Topology::new(4, 5, 3).unwrap();
    let examples = color_examples(80);

    for threads in [1usize, 4] {
        group.bench_with_input(
            BenchmarkId::new("50_iterations", threads),
            &threads,
            |b, &threads| {
                b.iter(|| {
                    let params = PsoParams::default().iterations(50).threads(threads);
                    let objective = CrossEntropy::new(topology, &examples);
                    ParticleSwarm::new(objective, params)
                        .unwrap()
                        .run(None, &NullReporter)
                        .unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_forward, bench_fitness, bench_swarm);
criterion_main!(benches);
