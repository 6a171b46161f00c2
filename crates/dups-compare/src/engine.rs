//! Concurrent pairwise comparison of two unit sequences.

use parking_lot::Mutex;
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use dups_core::config::CompareConfig;
use dups_core::{MatchedPair, TextUnit};

use crate::matrix::SimilarityMatrix;
use crate::similarity::Similarity;

/// Receives progress while a comparison runs. Called from worker threads.
pub trait ProgressObserver: Send + Sync {
    /// Total number of cells about to be processed.
    fn on_start(&self, _total: u64) {}

    /// `delta` more cells were computed or skipped.
    fn on_advance(&self, delta: u64);

    fn on_finish(&self) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_advance(&self, _delta: u64) {}
}

/// Fills a [`SimilarityMatrix`] by scoring every pair of units in parallel.
///
/// Each cell is an independent unit of work on a rayon pool: a private pool
/// of `workers` threads when set, the global pool otherwise. Units that
/// normalized to nothing are skipped and leave their cells at the zero value.
#[derive(Debug, Clone, Default)]
pub struct ComparisonEngine {
    workers: Option<usize>,
}

impl ComparisonEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workers(workers: usize) -> Self {
        Self { workers: Some(workers.max(1)) }
    }

    pub fn from_config(config: &CompareConfig) -> Self {
        Self { workers: config.workers.map(|w| w.max(1)) }
    }

    pub fn workers(&self) -> Option<usize> {
        self.workers
    }

    pub fn compare<S>(&self, a: &[TextUnit], b: &[TextUnit], similarity: &S) -> SimilarityMatrix
    where
        S: Similarity + ?Sized,
    {
        self.compare_with_progress(a, b, similarity, &NoProgress)
    }

    /// Compare and report progress to `progress`. Returns only once every
    /// cell has been processed.
    pub fn compare_with_progress<S, P>(
        &self,
        a: &[TextUnit],
        b: &[TextUnit],
        similarity: &S,
        progress: &P,
    ) -> SimilarityMatrix
    where
        S: Similarity + ?Sized,
        P: ProgressObserver + ?Sized,
    {
        let started = Instant::now();
        let cols = b.len();
        let total = a.len() * cols;
        progress.on_start(total as u64);

        let store = Mutex::new(SimilarityMatrix::new(a.len(), cols));
        let computed = AtomicU64::new(0);

        let fill = || {
            (0..a.len()).into_par_iter().for_each(|i| {
                let ua = &a[i];
                if ua.is_skipped() {
                    progress.on_advance(cols as u64);
                    return;
                }
                (0..cols).into_par_iter().for_each(|j| {
                    let ub = &b[j];
                    if !ub.is_skipped() {
                        let score = similarity.score(ua.normalized(), ub.normalized());
                        let pair = MatchedPair::new(ua.original(), ub.original(), score);
                        store.lock().set(i, j, pair);
                        computed.fetch_add(1, Ordering::Relaxed);
                    }
                    progress.on_advance(1);
                });
            });
        };

        match self.workers {
            Some(n) => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
                Ok(pool) => pool.install(fill),
                Err(e) => {
                    tracing::warn!(error = %e, workers = n, "could not build worker pool, using the global pool");
                    fill();
                }
            },
            None => fill(),
        }

        let matrix = store.into_inner();
        progress.on_finish();

        let computed = computed.into_inner();
        tracing::debug!(
            rows = a.len(),
            cols,
            computed,
            skipped = total as u64 - computed,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "comparison finished"
        );
        matrix
    }
}

/// Compare with a default engine.
pub fn compare<S>(a: &[TextUnit], b: &[TextUnit], similarity: &S) -> SimilarityMatrix
where
    S: Similarity + ?Sized,
{
    ComparisonEngine::new().compare(a, b, similarity)
}
