use antpath_core::field::Field;
use antpath_core::walker::{PheromoneWalker, WalkerConfig};
use antpath_core::{CellKind, FieldCoordinate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn open_field(size: usize) -> Field {
    let mut field = Field::new(size, size).unwrap();
    let mid = (size / 2) as i32;
    field.set_start_point(FieldCoordinate::new(mid, mid)).unwrap();
    field.set_kind(mid, 2, CellKind::Destination);
    field
}

fn walkers(field: &Field, count: usize) -> Vec<PheromoneWalker> {
    (0..count as u64)
        .map(|seed| PheromoneWalker::new(field.start_point(), WalkerConfig::default(), seed))
        .collect()
}

fn bench_advance_cycle(c: &mut Criterion) {
    let mut field = open_field(100);
    let mut agents = walkers(&field, 250);

    c.bench_function("advance_cycle_100x100_250_agents", |b| {
        b.iter(|| {
            field.advance_cycle(&mut agents);
            black_box(field.cycle())
        })
    });
}

fn bench_decay_only(c: &mut Criterion) {
    let mut field = open_field(500);
    for x in 0..500 {
        field.reinforce(x, 250, 1_000_000);
    }

    c.bench_function("decay_500x500", |b| {
        b.iter(|| {
            field.decay();
            black_box(field.cell(0, 250).map(|c| c.pheromone()))
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let field = open_field(100);

    c.bench_function("render_ascii_100x100", |b| {
        b.iter(|| black_box(field.render_ascii(&[])))
    });
}

criterion_group!(benches, bench_advance_cycle, bench_decay_only, bench_render);
criterion_main!(benches);
