use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use cave_mazes::{
    config::{CarveOptions, CarveOptionsBuilder, MazeConfig},
    generators,
    maze::Maze,
    renderers::{self, TextRenderOptions},
    units::{CellRadius, Height, Width},
};

fn bench_carve_default_maze(c: &mut Criterion) {
    let mut maze = Maze::new(MazeConfig::default());
    let mut rng = XorShiftRng::seed_from_u64(42);
    let options = CarveOptions::default();

    c.bench_function("carve_60x25_r2", move |b| {
        b.iter(|| generators::carve(&mut maze, &mut rng, &options).unwrap())
    });
}

fn bench_carve_large_maze(c: &mut Criterion) {
    let config = MazeConfig::new(Width(400), Height(200), CellRadius(2)).unwrap();
    let mut maze = Maze::new(config);
    let mut rng = XorShiftRng::seed_from_u64(42);
    let options = CarveOptions::default();

    c.bench_function("carve_400x200_r2", move |b| {
        b.iter(|| generators::carve(&mut maze, &mut rng, &options).unwrap())
    });
}

fn bench_carve_large_maze_without_healing(c: &mut Criterion) {
    let config = MazeConfig::new(Width(400), Height(200), CellRadius(2)).unwrap();
    let mut maze = Maze::new(config);
    let mut rng = XorShiftRng::seed_from_u64(42);
    let options = CarveOptionsBuilder::new().heal_iterations(0).build();

    c.bench_function("carve_400x200_r2_no_healing", move |b| {
        b.iter(|| generators::carve(&mut maze, &mut rng, &options).unwrap())
    });
}

fn bench_render_default_maze(c: &mut Criterion) {
    let (maze, _) = generators::generate_seeded(MazeConfig::default(), 42, &CarveOptions::default())
        .unwrap();
    let options = TextRenderOptions::default();

    c.bench_function("render_60x25", move |b| {
        b.iter(|| renderers::render_to_string(&maze, &options))
    });
}

criterion_group!(
    benches,
    bench_carve_default_maze,
    bench_carve_large_maze,
    bench_carve_large_maze_without_healing,
    bench_render_default_maze
);
criterion_main!(benches);
