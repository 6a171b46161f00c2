//! Subcommand implementations. Each writes its report to `out`.

use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use dups_compare::{
    exact_matches, threshold_matches, ComparisonEngine, EmbeddingSimilarity, ExactMatch, Similarity,
    SimilarityMatrix,
};
use dups_core::config::DupsConfig;
use dups_core::input::read_source;
use dups_core::ngram::NgramAggregator;
use dups_core::{containment, normalize, resemblance, segment_into_sentences, TextUnit};

use crate::cli::{EqArgs, InputArgs, NgramArgs, NormArgs, SetArgs, W2vArgs};
use crate::load;
use crate::progress::BarProgress;
use crate::report::{self, Report};

fn read_input(input: &InputArgs) -> Result<String> {
    read_source(input.file.as_deref()).context("cannot read input")
}

pub fn norm<W: Write>(args: &NormArgs, out: &mut W) -> Result<()> {
    let text = read_input(&args.input)?;
    for line in text.lines() {
        writeln!(out, "{}", normalize(line, args.remove_stops))?;
    }
    Ok(())
}

pub fn str2n<W: Write>(args: &NgramArgs, config: &DupsConfig, out: &mut W) -> Result<()> {
    let size = args.size.unwrap_or(config.ngram.size);
    if size == 0 {
        bail!("n-gram size must be at least 1");
    }
    let text = read_input(&args.input)?;
    let mut aggregator = NgramAggregator::new(size);
    for word in text.split_whitespace() {
        if let Some(ngram) = aggregator.push(word) {
            writeln!(out, "{ngram}")?;
        }
    }
    tracing::debug!(size, unique = aggregator.len(), "n-grams extracted");
    Ok(())
}

pub fn str2s<W: Write>(args: &InputArgs, out: &mut W) -> Result<()> {
    let text = read_input(args)?;
    for sentence in segment_into_sentences(&text) {
        writeln!(out, "{sentence}")?;
    }
    Ok(())
}

pub async fn con<W: Write>(args: &SetArgs, out: &mut W) -> Result<()> {
    let (a, b) = load::load_line_sets(&args.file_a, &args.file_b).await?;
    writeln!(out, "{}", containment(&a, &b))?;
    Ok(())
}

pub async fn res<W: Write>(args: &SetArgs, out: &mut W) -> Result<()> {
    let (a, b) = load::load_line_sets(&args.file_a, &args.file_b).await?;
    writeln!(out, "{}", resemblance(&a, &b))?;
    Ok(())
}

fn engine_for(workers: Option<usize>, config: &DupsConfig) -> ComparisonEngine {
    match workers {
        Some(n) => ComparisonEngine::with_workers(n),
        None => ComparisonEngine::from_config(&config.compare),
    }
}

/// Run the comparison off the async runtime with a progress bar on stderr.
async fn compare_blocking<S>(
    engine: ComparisonEngine,
    a: Vec<TextUnit>,
    b: Vec<TextUnit>,
    similarity: Arc<S>,
) -> Result<SimilarityMatrix>
where
    S: Similarity + 'static,
{
    tokio::task::spawn_blocking(move || {
        let progress = BarProgress::new("comparing files");
        engine.compare_with_progress(&a, &b, similarity.as_ref(), &progress)
    })
    .await
    .context("comparison task failed")
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

pub async fn eq<W: Write>(args: &EqArgs, config: &DupsConfig, out: &mut W) -> Result<()> {
    let remove_stop_words = args.stops.resolve(config.compare.remove_stop_words);
    let (a, b) = load::load_pair(&args.file_a, &args.file_b, remove_stop_words).await?;
    let (len_a, len_b) = (a.len(), b.len());

    let engine = engine_for(args.workers, config);
    let matrix = compare_blocking(engine, a, b, Arc::new(ExactMatch)).await?;
    let matches = exact_matches(&matrix);

    let (file_a, file_b) = (display(&args.file_a), display(&args.file_b));
    let report = Report::new(&file_a, &file_b, &matches, len_a, len_b);
    tracing::info!(matches = matches.len(), len_a, len_b, "exact comparison done");

    if args.json {
        report::write_json(out, &report)
    } else {
        report::write_exact(out, &report)?;
        Ok(())
    }
}

pub async fn w2v<W: Write>(args: &W2vArgs, config: &DupsConfig, out: &mut W) -> Result<()> {
    let threshold = args.score.unwrap_or(config.compare.threshold);
    if !(0.0..=1.0).contains(&threshold) {
        bail!("score must be within [0, 1], got {threshold}");
    }
    let cell_size = args.cell_size.unwrap_or(config.heatmap.cell_size);
    if args.heatmap.is_some() && cell_size == 0 {
        bail!("heatmap cell size must be at least 1");
    }
    let remove_stop_words = args.stops.resolve(config.compare.remove_stop_words);

    let (model, (a, b)) = tokio::try_join!(
        load::load_model(args.model.clone()),
        load::load_pair(&args.file_a, &args.file_b, remove_stop_words),
    )?;
    let (len_a, len_b) = (a.len(), b.len());

    let similarity = Arc::new(EmbeddingSimilarity::new(model));
    let engine = engine_for(args.workers, config);
    let matrix = compare_blocking(engine, a, b, Arc::clone(&similarity)).await?;

    let not_found = similarity.not_found_terms();
    if !not_found.is_empty() {
        tracing::warn!(count = not_found.len(), terms = %not_found.join(", "), "words not found in model");
    }

    if let Some(path) = &args.heatmap {
        let grid = matrix.score_grid();
        return tokio::task::spawn_blocking({
            let path = path.clone();
            move || dups_heatmap::render_heatmap(&grid, cell_size, &path)
        })
        .await
        .context("heatmap task failed")?
        .with_context(|| format!("error generating heatmap {}", path.display()));
    }

    let matches = threshold_matches(&matrix, threshold);
    let (file_a, file_b) = (display(&args.file_a), display(&args.file_b));
    let report = Report::new(&file_a, &file_b, &matches, len_a, len_b)
        .with_threshold(threshold)
        .with_not_found(&not_found);
    tracing::info!(matches = matches.len(), threshold, len_a, len_b, "embedding comparison done");

    if args.json {
        report::write_json(out, &report)
    } else {
        report::write_ranked(out, &report)?;
        Ok(())
    }
}
