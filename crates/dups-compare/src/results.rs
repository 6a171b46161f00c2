//! Turning a finished matrix into match lists and summaries.

use serde::Serialize;
use std::collections::HashSet;

use dups_core::{MatchResult, MatchedPair};

use crate::matrix::SimilarityMatrix;

/// Cells accepted by `predicate`, in row-major order.
pub fn filter<P>(matrix: &SimilarityMatrix, predicate: P) -> Vec<MatchResult>
where
    P: Fn(&MatchedPair) -> bool,
{
    matrix
        .iter()
        .filter(|(_, _, pair)| predicate(pair))
        .map(|(i, j, pair)| MatchResult { a_index: i, b_index: j, pair: pair.clone() })
        .collect()
}

/// Sort by descending score. The sort is stable, so equal scores keep their
/// incoming order.
pub fn rank(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(|x, y| y.score().total_cmp(&x.score()));
    results
}

/// Cells scoring exactly 1.
pub fn exact_matches(matrix: &SimilarityMatrix) -> Vec<MatchResult> {
    filter(matrix, |p| p.score == 1.0)
}

/// Cells scoring at least `threshold`, best first.
///
/// Skipped cells score 0, so a threshold of 0 also returns them.
pub fn threshold_matches(matrix: &SimilarityMatrix, threshold: f64) -> Vec<MatchResult> {
    rank(filter(matrix, |p| p.score >= threshold))
}

/// Match coverage of one input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SequenceSummary {
    pub total_units: usize,
    /// Distinct units of this sequence that appear in at least one match.
    pub matched_units: usize,
    /// `matched_units * 100 / total_units`, truncated. Each unit counts once,
    /// so a unit matching several units on the other side adds only one.
    pub percentage: usize,
}

impl SequenceSummary {
    pub fn new(total_units: usize, matched_units: usize) -> Self {
        let percentage = if total_units == 0 { 0 } else { matched_units * 100 / total_units };
        Self { total_units, matched_units, percentage }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub matches: usize,
    pub a: SequenceSummary,
    pub b: SequenceSummary,
}

impl MatchSummary {
    pub fn from_results(results: &[MatchResult], len_a: usize, len_b: usize) -> Self {
        let matched_a: HashSet<usize> = results.iter().map(|r| r.a_index).collect();
        let matched_b: HashSet<usize> = results.iter().map(|r| r.b_index).collect();
        Self {
            matches: results.len(),
            a: SequenceSummary::new(len_a, matched_a.len()),
            b: SequenceSummary::new(len_b, matched_b.len()),
        }
    }
}
