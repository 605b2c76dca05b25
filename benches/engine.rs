use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use toruslife::{Cell, Dimensions, GameOfLife, Grid, RuleTable, Strategy};

fn make_grid(size: i64) -> Grid {
    let dims = Dimensions::new(size, size).expect("valid dimensions");
    let live = (0..dims.height())
        .flat_map(|row| (0..dims.width()).map(move |col| Cell::new(row, col)))
        .filter(|cell| (cell.row + cell.col) % 3 == 0);
    Grid::from_live(dims, live)
}

fn bench_next_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_generation");
    for size in [64, 256, 1024] {
        let grid = make_grid(size);

        for (name, strategy) in [
            ("sequential", Strategy::Sequential),
            ("parallel", Strategy::parallel()),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), &grid, |b, grid| {
                b.iter_batched(
                    || GameOfLife::new(grid.clone(), RuleTable::conway(), strategy),
                    |mut game| game.next_generation(),
                    BatchSize::LargeInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_next_generation);
criterion_main!(benches);
