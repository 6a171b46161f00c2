//! The `dups` command-line tool: text preparation utilities and exact or
//! word2vec comparison of two documents.

pub mod cli;
pub mod commands;
pub mod load;
pub mod progress;
pub mod report;

use anyhow::Result;
use std::io::Write;
use tracing_subscriber::EnvFilter;

use dups_core::config::DupsConfig;

use crate::cli::{Cli, Command};

/// Filter directive from `RUST_LOG`, else the `--log-level` flag, else the
/// config.
pub fn log_filter(flag: Option<&str>, config: &DupsConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(flag.unwrap_or(&config.log_level)))
}

/// Install the stderr subscriber. Stdout carries reports only.
pub fn init_logging(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Dispatch a parsed command line against `config`.
pub async fn run<W: Write>(cli: &Cli, config: &DupsConfig, out: &mut W) -> Result<()> {
    match &cli.command {
        Command::Norm(args) => commands::norm(args, out),
        Command::Str2n(args) => commands::str2n(args, config, out),
        Command::Str2s(args) => commands::str2s(args, out),
        Command::Con(args) => commands::con(args, out).await,
        Command::Res(args) => commands::res(args, out).await,
        Command::Eq(args) => commands::eq(args, config, out).await,
        Command::W2v(args) => commands::w2v(args, config, out).await,
    }
}
