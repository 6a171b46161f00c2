//! End-to-end tests: raw sentences through normalization, the comparison
//! engine and result post-processing.

use dups_compare::{
    exact_matches, threshold_matches, ComparisonEngine, EmbeddingSimilarity, ExactMatch,
    MatchSummary, SimilarityMatrix,
};
use dups_core::{prepare_units, segment_into_sentences, NormalizeCache, TextUnit};
use dups_embed::Word2VecModel;
use std::sync::Arc;

fn prepare<S: AsRef<str>>(raw: &[S], remove_stop_words: bool) -> Vec<TextUnit> {
    let cache = NormalizeCache::new();
    prepare_units(raw, remove_stop_words, &cache)
}

fn toy_model() -> Arc<Word2VecModel> {
    let model = Word2VecModel::from_pairs(
        3,
        vec![
            ("cat", vec![1.0, 0.1, 0.0]),
            ("kitten", vec![0.9, 0.2, 0.0]),
            ("sat", vec![0.0, 1.0, 0.0]),
            ("rested", vec![0.1, 0.9, 0.1]),
            ("stock", vec![0.0, 0.0, 1.0]),
            ("market", vec![-0.2, -0.1, 0.9]),
            ("crashed", vec![-0.3, -0.5, 0.6]),
        ],
    )
    .unwrap();
    Arc::new(model)
}

#[test]
fn test_cat_example_end_to_end() {
    let a = prepare(&["The cat sat.", "Dogs bark."], false);
    let b = prepare(&["The cat sat!", "Birds fly."], false);
    assert_eq!(a[0].normalized(), "the cat sat");
    assert_eq!(a[1].normalized(), "dogs bark");
    assert_eq!(b[0].normalized(), "the cat sat");
    assert_eq!(b[1].normalized(), "birds fly");

    let matrix = ComparisonEngine::new().compare(&a, &b, &ExactMatch);
    assert_eq!(matrix.dimensions(), (2, 2));
    assert_eq!(matrix.score(0, 0), 1.0);
    assert_eq!(matrix.score(0, 1), 0.0);
    assert_eq!(matrix.score(1, 0), 0.0);
    assert_eq!(matrix.score(1, 1), 0.0);

    let matches = exact_matches(&matrix);
    assert_eq!(matches.len(), 1);
    assert_eq!((matches[0].a_index, matches[0].b_index), (0, 0));
    assert_eq!(matches[0].pair.original_a, "The cat sat.");
    assert_eq!(matches[0].pair.original_b, "The cat sat!");

    let summary = MatchSummary::from_results(&matches, a.len(), b.len());
    assert_eq!(summary.a.percentage, 50);
    assert_eq!(summary.b.percentage, 50);
}

#[test]
fn test_segmented_documents() {
    let doc_a = "Mr. Brown opened the shop. It rained all day! Nobody came.";
    let doc_b = "Nobody came. The shop stayed open; it rained all day.";
    let a_raw = segment_into_sentences(doc_a);
    let b_raw = segment_into_sentences(doc_b);
    let a = prepare(&a_raw, false);
    let b = prepare(&b_raw, false);

    let matrix = ComparisonEngine::with_workers(2).compare(&a, &b, &ExactMatch);
    let found: Vec<(usize, usize)> = exact_matches(&matrix)
        .iter()
        .map(|r| (r.a_index, r.b_index))
        .collect();
    assert_eq!(found, vec![(2, 0)]);
}

#[test]
fn test_stop_word_removal_widens_matches() {
    let raw_a = ["The cat sat on the mat."];
    let raw_b = ["A cat sat on a mat!"];
    let strict = ComparisonEngine::new().compare(&prepare(&raw_a, false), &prepare(&raw_b, false), &ExactMatch);
    let loose = ComparisonEngine::new().compare(&prepare(&raw_a, true), &prepare(&raw_b, true), &ExactMatch);
    assert_eq!(strict.score(0, 0), 0.0);
    assert_eq!(loose.score(0, 0), 1.0);
}

#[test]
fn test_numeric_sentences_are_skipped() {
    let a = prepare(&["1999.", "Cats purr."], false);
    let b = prepare(&["1999.", "Cats purr."], false);
    let matrix = ComparisonEngine::new().compare(&a, &b, &ExactMatch);
    assert!(matrix.row(0).iter().all(|p| p.is_zero()));
    assert!(matrix[(1, 0)].is_zero());
    assert_eq!(matrix.score(1, 1), 1.0);
}

#[test]
fn test_compare_is_deterministic() {
    let raw: Vec<String> = (0..25).map(|i| format!("Sentence number {} here.", ["one", "two", "three"][i % 3])).collect();
    let a = prepare(&raw, false);
    let runs: Vec<SimilarityMatrix> = (0..4)
        .map(|w| ComparisonEngine::with_workers(w + 1).compare(&a, &a, &ExactMatch))
        .collect();
    for run in &runs[1..] {
        assert_eq!(run, &runs[0]);
    }
}

#[test]
fn test_embedding_similarity_ranks_paraphrases() {
    let similarity = EmbeddingSimilarity::new(toy_model());
    let a = prepare(&["The cat sat.", "The stock market crashed."], true);
    let b = prepare(&["A kitten rested.", "Stock market crashed!", "Zebras graze."], true);

    let matrix = ComparisonEngine::new().compare(&a, &b, &similarity);
    assert!(matrix.iter().all(|(_, _, p)| (0.0..=1.0).contains(&p.score)));
    assert!(matrix.score(0, 0) > matrix.score(0, 1));
    assert!((matrix.score(1, 1) - 1.0).abs() < 1e-6);
    assert_eq!(matrix.score(0, 2), 0.0);

    let ranked = threshold_matches(&matrix, 0.9);
    assert_eq!((ranked[0].a_index, ranked[0].b_index), (1, 1));
    assert!(ranked.iter().any(|r| (r.a_index, r.b_index) == (0, 0)));
    assert!(ranked.windows(2).all(|w| w[0].pair.score >= w[1].pair.score));

    assert_eq!(similarity.not_found_terms(), vec!["graze", "zebras"]);
}

#[test]
fn test_matrix_serializes() {
    let a = prepare(&["Hello there."], false);
    let matrix = ComparisonEngine::new().compare(&a, &a, &ExactMatch);
    let json = serde_json::to_value(&matrix).unwrap();
    assert_eq!(json["rows"], 1);
    assert_eq!(json["cells"][0]["score"], 1.0);
    assert_eq!(json["cells"][0]["original_a"], "Hello there.");
}
