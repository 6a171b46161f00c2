use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dups_core::{ngram, normalize, segment_into_sentences, NormalizeCache};
use rand::seq::SliceRandom;
use rand::SeedableRng;

const WORDS: &[&str] = &[
    "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "Mr.", "Smith",
    "well-known", "1984", "said", "\"hello\"", "river", "bank", "flows", "north",
];

fn generate_text(words: usize) -> String {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let mut text = String::new();
    for i in 0..words {
        text.push_str(WORDS.choose(&mut rng).unwrap());
        text.push_str(if i % 12 == 11 { ". " } else { " " });
    }
    text
}

fn bench_normalize(c: &mut Criterion) {
    let text = generate_text(2_000);
    let sentences = segment_into_sentences(&text);
    c.bench_function("normalize_sentences", |b| {
        b.iter(|| {
            for s in &sentences {
                black_box(normalize(black_box(s), true));
            }
        })
    });
    c.bench_function("normalize_sentences_cached", |b| {
        let cache = NormalizeCache::new();
        b.iter(|| {
            for s in &sentences {
                black_box(cache.normalize(black_box(s), true));
            }
        })
    });
}

fn bench_segment(c: &mut Criterion) {
    let text = generate_text(20_000);
    c.bench_function("segment_20k_words", |b| {
        b.iter(|| black_box(segment_into_sentences(black_box(&text))))
    });
}

fn bench_ngrams(c: &mut Criterion) {
    let text = generate_text(20_000);
    for n in [2usize, 3, 5] {
        c.bench_function(&format!("ngrams_n{n}_20k_words"), |b| {
            b.iter(|| black_box(ngram::ngrams(black_box(&text), n)))
        });
    }
}

criterion_group!(benches, bench_normalize, bench_segment, bench_ngrams);
criterion_main!(benches);
