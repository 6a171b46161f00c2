//! Command-line surface of the `dups` binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Find equal and similar sentences across text documents
#[derive(Parser, Debug)]
#[command(name = "dups", version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (JSON). Defaults to <config_dir>/dups/config.json when present
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter for stderr, e.g. `info` or `dups_compare=debug`. RUST_LOG wins
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize text line by line: strip titles, numerics, hyphens and
    /// internal punctuation, expand ligatures, lowercase
    Norm(NormArgs),

    /// Print the unique n-grams of the input, one per line, in first-seen order
    #[command(name = "str2n")]
    Str2n(NgramArgs),

    /// Split the input into sentences, one per line
    #[command(name = "str2s")]
    Str2s(InputArgs),

    /// Containment of the line set of B within the line set of A
    Con(SetArgs),

    /// Resemblance of the line sets of A and B
    Res(SetArgs),

    /// Find equal sentences in two files
    Eq(EqArgs),

    /// Use a word2vec model to find similar sentences in two files
    #[command(name = "w2v")]
    W2v(W2vArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Input file. Standard input when omitted
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct NormArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Remove English stop words
    #[arg(short = 'r', long = "remove-stops")]
    pub remove_stops: bool,
}

#[derive(Args, Debug, Clone)]
pub struct NgramArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Words per n-gram [default: config ngram.size, 3]
    #[arg(short, long)]
    pub size: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct SetArgs {
    /// File with one entry per line
    pub file_a: PathBuf,
    /// File with one entry per line
    pub file_b: PathBuf,
}

/// Stop-word handling for the comparison commands. Neither flag defers to
/// the config's `compare.remove_stop_words`.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct StopWordArgs {
    /// Remove English stop words before comparing
    #[arg(short = 'r', long = "remove-stops", conflicts_with = "keep_stops")]
    pub remove_stops: bool,

    /// Keep stop words
    #[arg(long = "keep-stops")]
    pub keep_stops: bool,
}

impl StopWordArgs {
    pub fn resolve(&self, configured: bool) -> bool {
        if self.remove_stops {
            true
        } else if self.keep_stops {
            false
        } else {
            configured
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct EqArgs {
    pub file_a: PathBuf,
    pub file_b: PathBuf,

    #[command(flatten)]
    pub stops: StopWordArgs,

    /// Worker threads for the comparison [default: all cores]
    #[arg(long)]
    pub workers: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct W2vArgs {
    /// Word2vec model in binary format
    pub model: PathBuf,
    pub file_a: PathBuf,
    pub file_b: PathBuf,

    #[command(flatten)]
    pub stops: StopWordArgs,

    /// Only report matches scoring at least this, in [0, 1]. Ignored with --heatmap
    #[arg(short, long)]
    pub score: Option<f64>,

    /// Write a PNG heatmap of all scores to this file instead of listing matches
    #[arg(long, value_name = "PNG")]
    pub heatmap: Option<PathBuf>,

    /// Heatmap cell edge in pixels [default: config heatmap.cell_size, 25]
    #[arg(long)]
    pub cell_size: Option<u32>,

    /// Worker threads for the comparison [default: all cores]
    #[arg(long)]
    pub workers: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}
