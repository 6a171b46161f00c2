//! Pairwise sentence comparison: similarity functions, the concurrent
//! comparison engine, and post-processing of its matrix.

pub mod engine;
pub mod matrix;
pub mod results;
pub mod similarity;

pub use engine::{compare, ComparisonEngine, NoProgress, ProgressObserver};
pub use matrix::SimilarityMatrix;
pub use results::{exact_matches, filter, rank, threshold_matches, MatchSummary, SequenceSummary};
pub use similarity::{EmbeddingSimilarity, ExactMatch, Similarity};
