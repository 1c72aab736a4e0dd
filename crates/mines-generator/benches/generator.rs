//! Benchmarks for mine layout generation.
//!
//! # Benchmarks
//!
//! - **`generate_uniform`**: Places mines anywhere on the board.
//! - **`generate_avoid_corners`**: Places mines everywhere except the four
//!   corners, which also measures building the reduced candidate list.
//!
//! Each benchmark runs on a small (10x10, 15 mines) and a large (30x30,
//! 225 mines) board.
//!
//! # Test Data
//!
//! Uses three fixed seeds so every run generates the same layouts:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use mines_core::BoardConfig;
use mines_generator::{BoardSeed, MineGenerator, PlacementPolicy};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

const BOARDS: [(&str, usize, usize, usize); 2] = [("10x10", 10, 10, 15), ("30x30", 30, 30, 225)];

fn bench_policy(c: &mut Criterion, name: &str, policy: PlacementPolicy) {
    let generator = MineGenerator::with_policy(policy);

    for (board, height, width, mines) in BOARDS {
        let config = BoardConfig::new(height, width, mines).unwrap();
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = BoardSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(name, format!("{board}/seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || hint::black_box(*seed),
                        |seed| generator.generate_with_seed(&config, seed),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

fn bench_generate_uniform(c: &mut Criterion) {
    bench_policy(c, "generate_uniform", PlacementPolicy::Uniform);
}

fn bench_generate_avoid_corners(c: &mut Criterion) {
    bench_policy(c, "generate_avoid_corners", PlacementPolicy::AvoidCorners);
}

criterion_group!(
    name = benches;
    config = Criterion::default().plotting_backend(PlottingBackend::Plotters);
    targets =
        bench_generate_uniform,
        bench_generate_avoid_corners
);
criterion_main!(benches);
