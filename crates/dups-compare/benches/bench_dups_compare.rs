use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dups_compare::{exact_matches, threshold_matches, ComparisonEngine, ExactMatch};
use dups_core::TextUnit;
use rand::{Rng, SeedableRng};

fn generate_units(count: usize, distinct: usize, seed: u64) -> Vec<TextUnit> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let k = rng.gen_range(0..distinct);
            TextUnit::new(format!("Sentence {i}."), format!("sentence variant {k}"))
        })
        .collect()
}

fn bench_engine(c: &mut Criterion) {
    let a = generate_units(500, 200, 1);
    let b = generate_units(500, 200, 2);
    for (name, engine) in [
        ("global", ComparisonEngine::new()),
        ("workers_1", ComparisonEngine::with_workers(1)),
        ("workers_4", ComparisonEngine::with_workers(4)),
    ] {
        c.bench_function(&format!("compare_exact_500x500_{name}"), |bench| {
            bench.iter(|| black_box(engine.compare(black_box(&a), black_box(&b), &ExactMatch)))
        });
    }
}

fn bench_results(c: &mut Criterion) {
    let a = generate_units(500, 50, 3);
    let b = generate_units(500, 50, 4);
    let matrix = ComparisonEngine::new().compare(&a, &b, &ExactMatch);
    c.bench_function("exact_matches_500x500", |bench| {
        bench.iter(|| black_box(exact_matches(black_box(&matrix))))
    });
    c.bench_function("threshold_matches_500x500", |bench| {
        bench.iter(|| black_box(threshold_matches(black_box(&matrix), 0.5)))
    });
}

criterion_group!(benches, bench_engine, bench_results);
criterion_main!(benches);
