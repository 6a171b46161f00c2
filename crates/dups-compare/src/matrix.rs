//! Dense `len(A) x len(B)` similarity matrix.

use serde::Serialize;
use std::ops::Index;

use dups_core::MatchedPair;

/// Row `i` holds the comparisons of `A[i]` against every unit of `B`.
///
/// Cells that were never computed keep `MatchedPair::default()`, which reads
/// exactly like a computed score of zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<MatchedPair>,
}

impl SimilarityMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![MatchedPair::default(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&MatchedPair> {
        if i >= self.rows || j >= self.cols {
            return None;
        }
        self.cells.get(i * self.cols + j)
    }

    /// Score at `(i, j)`, 0 outside the matrix.
    pub fn score(&self, i: usize, j: usize) -> f64 {
        self.get(i, j).map_or(0.0, |p| p.score)
    }

    pub fn row(&self, i: usize) -> &[MatchedPair] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// Cells in row-major order with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &MatchedPair)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(k, p)| (k / cols, k % cols, p))
    }

    /// Scores only, as consumed by the heatmap renderer.
    pub fn score_grid(&self) -> Vec<Vec<f32>> {
        (0..self.rows)
            .map(|i| self.row(i).iter().map(|p| p.score as f32).collect())
            .collect()
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, pair: MatchedPair) {
        let cols = self.cols;
        self.cells[i * cols + j] = pair;
    }
}

impl Index<(usize, usize)> for SimilarityMatrix {
    type Output = MatchedPair;

    fn index(&self, (i, j): (usize, usize)) -> &MatchedPair {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) outside {}x{}", self.rows, self.cols);
        &self.cells[i * self.cols + j]
    }
}
