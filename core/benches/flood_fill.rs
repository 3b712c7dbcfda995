use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use mineclear_core::*;
use std::hint::black_box;

fn bench_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");

    let empty = Board::from_mine_coords((255, 255), &[]).unwrap();
    group.bench_function("empty_255x255", |b| {
        b.iter_batched(
            || GameSession::new(empty.clone()),
            |mut session| black_box(session.reveal_cell(black_box((127, 127)))),
            BatchSize::LargeInput,
        )
    });

    let sparse = RandomBoardGenerator::new(0x5eed)
        .generate(GameConfig::new((100, 100), 400).unwrap())
        .unwrap();
    let start = sparse
        .iter()
        .find(|(_, cell)| !cell.is_mine() && cell.adjacent_mines() == 0)
        .map(|(pos, _)| pos)
        .unwrap_or((0, 0));
    group.bench_function("sparse_100x100", |b| {
        b.iter_batched(
            || GameSession::new(sparse.clone()),
            |mut session| black_box(session.reveal_cell(black_box(start))),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_flood_fill);
criterion_main!(benches);
