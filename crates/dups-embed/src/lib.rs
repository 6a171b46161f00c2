//! Word2vec embeddings for sentence similarity: a loader for the binary
//! model format, vector math, and a cached phrase-level cosine comparator.

pub mod cosine;
pub mod distance;
pub mod error;
pub mod model;

pub use cosine::{cosine_compare, phrase_vector, EmbeddingCache, PhraseVector};
pub use error::{EmbedError, Result};
pub use model::Word2VecModel;
