use anyhow::Context;
use clap::Parser;
use std::io::{BufWriter, Write};
use std::process::ExitCode;

use dups_cli::cli::Cli;
use dups_core::config::DupsConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match DupsConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };
    dups_cli::init_logging(dups_cli::log_filter(cli.log_level.as_deref(), &config));

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = dups_cli::run(&cli, &config, &mut out)
        .await
        .and_then(|()| out.flush().context("failed to write output"));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
