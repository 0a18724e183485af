use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use chaos_game::{
    ChaosGame, DensityColourMapKind, FractalPreset, density_colour_map_factory,
    description_factory, generate_pixel_buffer, run_games_parallel,
};

const WIDTH: usize = 400;
const HEIGHT: usize = 400;
const STEPS: u64 = 100_000;
const SEED: u64 = 42;

fn game(preset: FractalPreset) -> ChaosGame {
    ChaosGame::with_seed(description_factory(preset), WIDTH, HEIGHT, SEED)
        .expect("presets are valid")
}

fn bench_run_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_steps");

    for preset in [
        FractalPreset::SierpinskiTriangle,
        FractalPreset::BarnsleyFern,
        FractalPreset::JuliaSet,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(preset.name()), &preset, |b, &preset| {
            b.iter_batched(
                || game(preset),
                |mut game| {
                    game.run_steps(black_box(STEPS));
                    game
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_run_games_parallel(c: &mut Criterion) {
    c.bench_function("run_games_parallel_8", |b| {
        b.iter_batched(
            || (0..8).map(|_| game(FractalPreset::BarnsleyFern)).collect::<Vec<_>>(),
            |mut games| {
                run_games_parallel(&mut games, black_box(STEPS));
                games
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_generate_pixel_buffer(c: &mut Criterion) {
    let mut game = game(FractalPreset::BarnsleyFern);
    game.run_steps(STEPS);

    let mut group = c.benchmark_group("generate_pixel_buffer");

    for &kind in DensityColourMapKind::ALL {
        let colour_map = density_colour_map_factory(kind);
        group.bench_function(kind.name(), |b| {
            b.iter(|| generate_pixel_buffer(black_box(game.canvas()), &colour_map))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_run_steps,
    bench_run_games_parallel,
    bench_generate_pixel_buffer
);
criterion_main!(benches);
