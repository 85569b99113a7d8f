use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pmaze_core::{Maze, Random};
use rand::SeedableRng as _;

const SIZE: (i32, i32) = (100, 100);

pub fn generate(c: &mut Criterion) {
    c.bench_function("generate_100x100", |b| {
        let mut rng = Random::seed_from_u64(0);
        b.iter(|| Maze::generated(black_box(SIZE.0), black_box(SIZE.1), &mut rng).unwrap())
    });
}

pub fn solve(c: &mut Criterion) {
    let mut rng = Random::seed_from_u64(0);
    let maze = Maze::generated(SIZE.0, SIZE.1, &mut rng).unwrap();

    c.bench_function("solve_100x100", |b| b.iter(|| black_box(&maze).solve()));
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = generate, solve}
criterion_main!(benches);
