//! Command line interface for the packaging dispatcher.
//!
//! Parses arguments, merges them with `packaging.toml`, runs one dispatch
//! and writes the report.

mod args;
mod output;

pub use args::{Args, OutputFormat, RuntimeConfig};
pub use output::{DONE, DONE_WITH_ERRORS, OutputManager, notice, render_text};

use crate::bundler::Bundler;
use crate::error::{CliError, Result};
use std::io::Write;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args()?;
    run_with(&args, std::io::stdout()).await
}

/// Runs one dispatch for `args`, writing the report to `writer`.
///
/// Returns the process exit code: `0` on success, `1` on failure.
pub async fn run_with<W: Write>(args: &Args, writer: W) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let config = RuntimeConfig::resolve(args)?;
    log::debug!("Resolved settings: {:?}", config.settings());

    let bundler = Bundler::new(config.settings().clone());
    let report = bundler.dispatch().await;

    let mut output = OutputManager::new(writer, config.format());
    output.report(&report)?;

    Ok(if report.outcome().is_success() { 0 } else { 1 })
}
