//! Benchmarks for combat rounds and odds estimation.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use conquest::odds::estimate_odds;
use conquest::{GameRng, Map, Mission, Territory, process_attack};

fn sample_map() -> Map {
    Map::from_territories(
        vec![
            Territory::new("Brasil", "Red", 1_000_000),
            Territory::new("Argentina", "Blue", 1_000_000),
            Territory::new("Chile", "Green", 3),
            Territory::new("Peru", "Yellow", 4),
            Territory::new("Uruguai", "Blue", 1),
        ],
        5,
    )
    .unwrap()
}

fn bench_single_round(c: &mut Criterion) {
    let mut map = sample_map();
    let mut dice = GameRng::new(42);

    c.bench_function("single_round", |b| {
        b.iter(|| {
            let outcome = process_attack(&mut map, black_box(1), black_box(2), &mut dice);
            black_box(outcome)
        });
    });
}

fn bench_mission_checks(c: &mut Criterion) {
    let map = sample_map();

    c.bench_function("all_missions", |b| {
        b.iter(|| {
            for mission in Mission::ALL {
                black_box(mission.evaluate(black_box(&map), "Red"));
            }
        });
    });
}

fn bench_odds(c: &mut Criterion) {
    c.bench_function("odds_1000_trials", |b| {
        b.iter(|| black_box(estimate_odds(black_box(10), black_box(5), 1000, 42)));
    });
}

criterion_group!(benches, bench_single_round, bench_mission_checks, bench_odds);
criterion_main!(benches);
