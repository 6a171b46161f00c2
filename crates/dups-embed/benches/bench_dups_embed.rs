use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dups_embed::{cosine_compare, EmbeddingCache, Word2VecModel};
use rand::{Rng, SeedableRng};
use std::io::Cursor;

const DIM: usize = 100;

fn random_model(words: usize) -> Word2VecModel {
    let mut rng = rand::rngs::StdRng::seed_from_u64(11);
    let pairs = (0..words).map(|i| {
        let v: Vec<f32> = (0..DIM).map(|_| rng.gen_range(-1.0..1.0)).collect();
        (format!("w{i}"), v)
    });
    Word2VecModel::from_pairs(DIM, pairs).unwrap()
}

fn random_phrases(count: usize, vocab: usize) -> Vec<String> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(13);
    (0..count)
        .map(|_| {
            (0..8).map(|_| format!("w{}", rng.gen_range(0..vocab + vocab / 10)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_load(c: &mut Criterion) {
    let mut buf = Vec::new();
    random_model(10_000).write_binary(&mut buf).unwrap();
    c.bench_function("load_10k_words_dim100", |b| {
        b.iter(|| black_box(Word2VecModel::from_reader(Cursor::new(black_box(&buf))).unwrap()))
    });
}

fn bench_cosine(c: &mut Criterion) {
    let model = random_model(10_000);
    let phrases = random_phrases(100, 10_000);
    c.bench_function("cosine_compare_100x100_uncached", |b| {
        b.iter(|| {
            let cache = EmbeddingCache::new();
            for a in &phrases {
                for p in &phrases {
                    black_box(cosine_compare(a, p, &model, &cache));
                }
            }
        })
    });
}

criterion_group!(benches, bench_load, bench_cosine);
criterion_main!(benches);
