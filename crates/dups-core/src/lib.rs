//! Core building blocks for sentence-level duplicate detection: the shared
//! data model, configuration, text normalization, segmentation, n-gram
//! aggregation and set overlap measures.

pub mod config;
pub mod error;
pub mod input;
pub mod ngram;
pub mod normalize;
pub mod segment;
pub mod sets;
pub mod types;

pub use config::DupsConfig;
pub use error::{DupsError, Result};
pub use ngram::{NgramAggregator, WordWindow};
pub use normalize::{normalize, prepare_units, strip_terminator, NormalizeCache};
pub use segment::{segment_into_sentences, segment_into_set_of_lines};
pub use sets::{containment, resemblance};
pub use types::{MatchResult, MatchedPair, TextUnit};
