//! Report rendering.
//!
//! Dispatch never prints; everything the user sees on stdout is produced
//! here from a finished [`DispatchReport`].

use super::args::OutputFormat;
use crate::bundler::{DispatchReport, Error, TargetResult, TargetStatus};
use crate::error::Result;
use std::io::Write;

/// Final line for a successful dispatch.
pub const DONE: &str = "Done";

/// Final line for a failed dispatch.
pub const DONE_WITH_ERRORS: &str = "Done with errors";

/// Writes dispatch reports in the selected format.
#[derive(Debug)]
pub struct OutputManager<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> OutputManager<W> {
    /// Creates an output manager writing to `writer`.
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Writes the whole report and flushes.
    pub fn report(&mut self, report: &DispatchReport) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for line in render_text(report) {
                    writeln!(self.writer, "{line}")?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.writer, report)?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Consumes the manager, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// One notice per target followed by the verdict line.
pub fn render_text(report: &DispatchReport) -> Vec<String> {
    let mut lines: Vec<String> = report.results().iter().map(notice).collect();
    lines.push(
        if report.outcome().is_success() {
            DONE
        } else {
            DONE_WITH_ERRORS
        }
        .to_string(),
    );
    lines
}

/// Console notice for a single target.
pub fn notice(result: &TargetResult) -> String {
    let name = result.package_type.display_name();
    match &result.status {
        TargetStatus::Unsupported => Error::UnsupportedFormat(result.package_type).to_string(),
        TargetStatus::Built { artifact } => match artifact.paths.first() {
            Some(path) => format!("{name} package created: {}", path.display()),
            None => format!("{name} package created"),
        },
        TargetStatus::Failed { reason, .. } => format!("{name} package failed: {reason}"),
    }
}
