//! Concurrent loading and preprocessing of the comparison inputs.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dups_core::input::read_file;
use dups_core::{prepare_units, segment_into_sentences, segment_into_set_of_lines, NormalizeCache, TextUnit};
use dups_embed::Word2VecModel;

/// Read `path`, split it into sentences and normalize each one.
pub async fn load_units(path: PathBuf, remove_stop_words: bool, cache: Arc<NormalizeCache>) -> Result<Vec<TextUnit>> {
    let label = path.display().to_string();
    let units = tokio::task::spawn_blocking(move || -> dups_core::Result<Vec<TextUnit>> {
        let text = read_file(&path)?;
        let sentences = segment_into_sentences(&text);
        Ok(prepare_units(&sentences, remove_stop_words, &cache))
    })
    .await
    .context("preprocessing task failed")?
    .with_context(|| format!("failed to load {label}"))?;

    tracing::debug!(
        file = %label,
        sentences = units.len(),
        skipped = units.iter().filter(|u| u.is_skipped()).count(),
        "preprocessed"
    );
    Ok(units)
}

/// Load both inputs concurrently, sharing one normalization cache.
pub async fn load_pair(a: &Path, b: &Path, remove_stop_words: bool) -> Result<(Vec<TextUnit>, Vec<TextUnit>)> {
    let cache = Arc::new(NormalizeCache::new());
    tokio::try_join!(
        load_units(a.to_path_buf(), remove_stop_words, Arc::clone(&cache)),
        load_units(b.to_path_buf(), remove_stop_words, cache),
    )
}

/// The set of non-empty lines of `path`.
pub async fn load_line_set(path: PathBuf) -> Result<HashSet<String>> {
    let label = path.display().to_string();
    let lines = tokio::task::spawn_blocking(move || read_file(&path))
        .await
        .context("read task failed")?
        .with_context(|| format!("failed to read {label}"))?;
    Ok(segment_into_set_of_lines(&lines).into_iter().collect())
}

pub async fn load_line_sets(a: &Path, b: &Path) -> Result<(HashSet<String>, HashSet<String>)> {
    tokio::try_join!(load_line_set(a.to_path_buf()), load_line_set(b.to_path_buf()))
}

pub async fn load_model(path: PathBuf) -> Result<Arc<Word2VecModel>> {
    let label = path.display().to_string();
    let model = tokio::task::spawn_blocking(move || Word2VecModel::open(&path))
        .await
        .context("model loading task failed")?
        .with_context(|| format!("error loading word2vec model {label}"))?;
    Ok(Arc::new(model))
}
