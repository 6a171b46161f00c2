use serde::{Deserialize, Serialize};

/// One comparable unit: the text as read plus its canonical form.
///
/// An empty `normalized` marks the unit as skipped by comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextUnit {
    original: String,
    normalized: String,
}

impl TextUnit {
    pub fn new(original: impl Into<String>, normalized: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            normalized: normalized.into(),
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn is_skipped(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Contents of one similarity matrix cell.
///
/// `MatchedPair::default()` is the value of a cell that was never computed.
/// It is indistinguishable from a computed pair that scored zero, and
/// consumers filter both the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchedPair {
    pub original_a: String,
    pub original_b: String,
    pub score: f64,
}

impl MatchedPair {
    pub fn new(original_a: impl Into<String>, original_b: impl Into<String>, score: f64) -> Self {
        Self {
            original_a: original_a.into(),
            original_b: original_b.into(),
            score,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.score == 0.0 && self.original_a.is_empty() && self.original_b.is_empty()
    }
}

/// A matrix cell lifted out of the matrix together with its coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub a_index: usize,
    pub b_index: usize,
    pub pair: MatchedPair,
}

impl MatchResult {
    pub fn score(&self) -> f64 {
        self.pair.score
    }
}
