//! Pluggable pairwise similarity functions.

use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::sync::Arc;

use dups_embed::{cosine_compare, EmbeddingCache, Word2VecModel};

/// Scores two normalized text units. Implementations return a value in `[0, 1]`.
pub trait Similarity: Send + Sync {
    fn score(&self, a: &str, b: &str) -> f64;
}

impl<F> Similarity for F
where
    F: Fn(&str, &str) -> f64 + Send + Sync,
{
    fn score(&self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}

/// 1.0 for byte-equal inputs, otherwise 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl Similarity for ExactMatch {
    fn score(&self, a: &str, b: &str) -> f64 {
        if a == b { 1.0 } else { 0.0 }
    }
}

/// Normalized word2vec cosine between two phrases.
///
/// Words missing from the model are skipped when scoring and collected for
/// reporting once the comparison is done.
#[derive(Debug)]
pub struct EmbeddingSimilarity {
    model: Arc<Word2VecModel>,
    cache: EmbeddingCache,
    not_found: Mutex<BTreeSet<String>>,
}

impl EmbeddingSimilarity {
    pub fn new(model: Arc<Word2VecModel>) -> Self {
        Self {
            model,
            cache: EmbeddingCache::new(),
            not_found: Mutex::new(BTreeSet::new()),
        }
    }

    pub fn model(&self) -> &Word2VecModel {
        &self.model
    }

    /// Out-of-vocabulary terms seen so far, sorted.
    pub fn not_found_terms(&self) -> Vec<String> {
        self.not_found.lock().iter().cloned().collect()
    }
}

impl Similarity for EmbeddingSimilarity {
    fn score(&self, a: &str, b: &str) -> f64 {
        let (score, not_found) = cosine_compare(a, b, &self.model, &self.cache);
        if !not_found.is_empty() {
            self.not_found.lock().extend(not_found);
        }
        f64::from(score)
    }
}
