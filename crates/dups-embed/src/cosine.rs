//! Phrase-level cosine comparison over word2vec vectors.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::distance;
use crate::model::Word2VecModel;

/// Sum of the known word vectors of a phrase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhraseVector {
    /// `None` when no word of the phrase is in the vocabulary.
    pub vector: Option<Vec<f32>>,
    pub not_found: Vec<String>,
}

/// Unknown words are listed and otherwise ignored.
pub fn phrase_vector(phrase: &str, model: &Word2VecModel) -> PhraseVector {
    let mut acc: Option<Vec<f32>> = None;
    let mut not_found = Vec::new();
    for word in phrase.split_whitespace() {
        match model.vector(word) {
            Some(v) => match acc.as_mut() {
                Some(sum) => distance::add_assign(sum, v),
                None => acc = Some(v.to_vec()),
            },
            None => {
                if !not_found.iter().any(|w| w == word) {
                    not_found.push(word.to_string());
                }
            }
        }
    }
    PhraseVector { vector: acc, not_found }
}

/// Phrase vectors memoized for the length of one comparison run.
#[derive(Debug, Default)]
pub struct EmbeddingCache {
    phrases: RwLock<HashMap<String, Arc<PhraseVector>>>,
}

impl EmbeddingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&self, phrase: &str, model: &Word2VecModel) -> Arc<PhraseVector> {
        if let Some(hit) = self.phrases.read().get(phrase) {
            return Arc::clone(hit);
        }
        let computed = Arc::new(phrase_vector(phrase, model));
        self.phrases
            .write()
            .entry(phrase.to_string())
            .or_insert(computed)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.phrases.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compare two phrases: cosine of their summed vectors mapped onto `[0, 1]`.
///
/// Returns 0 when either phrase has no known word. The second element lists
/// the out-of-vocabulary words of both phrases, without repeats.
pub fn cosine_compare(
    a: &str,
    b: &str,
    model: &Word2VecModel,
    cache: &EmbeddingCache,
) -> (f32, Vec<String>) {
    let pa = cache.get_or_compute(a, model);
    let pb = cache.get_or_compute(b, model);

    let mut not_found = pa.not_found.clone();
    for word in &pb.not_found {
        if !not_found.contains(word) {
            not_found.push(word.clone());
        }
    }

    let score = match (&pa.vector, &pb.vector) {
        (Some(va), Some(vb)) => distance::normalized_cosine(distance::cosine_similarity(va, vb)),
        _ => 0.0,
    };
    (score, not_found)
}
