//! Command line argument parsing and validation.

use crate::bundler::{
    AggregationRule, Settings, SettingsBuilder, settings::DEFAULT_SOURCE_DIRECTORY,
};
use crate::config;
use crate::error::{CliError, Result};
use clap::{Parser, error::ErrorKind};
use std::path::PathBuf;

/// Report format written to stdout.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per target plus a final verdict
    #[default]
    Text,
    /// The full dispatch report as JSON
    Json,
}

/// Package BSDBook for every supported target
#[derive(Parser, Debug)]
#[command(
    name = "create_packages",
    version,
    about = "Build BSDBook packages for every target",
    long_about = "Builds BSDBook packages for every target (dpkg, pkg, mpkg, exe) and reports one verdict.

Usage:
  create_packages
  create_packages --source ../bsdbook --aggregation sum-of-codes
  create_packages --format json > report.json

Exit code 0 = every target counted as successful under the chosen aggregation rule."
)]
pub struct Args {
    /// Packaging source root
    #[arg(
        short = 's',
        long,
        value_name = "DIR",
        default_value = DEFAULT_SOURCE_DIRECTORY,
        env = "PACKAGER_SOURCE"
    )]
    pub source: PathBuf,

    /// Artifact output directory (default: <SOURCE>/dist)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// How target results combine: any-failure or sum-of-codes
    #[arg(short, long, value_name = "RULE", env = "PACKAGER_AGGREGATION")]
    pub aggregation: Option<AggregationRule>,

    /// Report format
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = OutputFormat::Text,
        env = "PACKAGER_FORMAT"
    )]
    pub format: OutputFormat,

    /// Configuration file (default: <SOURCE>/packaging.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parse command line arguments
    ///
    /// `--help` and `--version` print and exit; every other parse failure
    /// becomes [`CliError::InvalidArguments`].
    pub fn parse_args() -> Result<Self> {
        Self::from_parse_result(Self::try_parse())
    }

    /// Maps a clap parse result onto the crate's error type.
    pub fn from_parse_result(result: std::result::Result<Self, clap::Error>) -> Result<Self> {
        match result {
            Ok(args) => Ok(args),
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::DisplayHelp
                        | ErrorKind::DisplayVersion
                        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) =>
            {
                e.exit()
            }
            Err(e) => Err(CliError::InvalidArguments {
                reason: clap_reason(&e),
            }
            .into()),
        }
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.source.is_dir() {
            return Err(format!(
                "Source directory does not exist: {}",
                self.source.display()
            ));
        }

        match &self.config {
            Some(config) if !config.is_file() => {
                return Err(format!(
                    "Configuration file does not exist: {}",
                    config.display()
                ));
            }
            _ => {}
        }

        Ok(())
    }
}

/// First line of a clap error, without clap's own `error: ` prefix.
fn clap_reason(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

/// Configuration derived from command line arguments and `packaging.toml`.
///
/// Flags take precedence over the configuration file.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    settings: Settings,
    format: OutputFormat,
}

impl RuntimeConfig {
    /// Merges `args` with the configuration file they point at.
    pub fn resolve(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => config::load_config(path)?,
            None => config::load_config_from_source(&args.source)?,
        };

        let mut builder = SettingsBuilder::new()
            .source_directory(&args.source)
            .package_settings(file.package_settings())
            .aggregation(
                args.aggregation
                    .or(file.aggregation())
                    .unwrap_or_default(),
            );

        if let Some(out_dir) = args.out_dir.clone().or_else(|| file.out_dir(&args.source)) {
            builder = builder.project_out_directory(out_dir);
        }

        Ok(Self {
            settings: builder.build()?,
            format: args.format,
        })
    }

    /// Settings for the dispatch.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Report format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("create_packages").chain(argv.iter().copied()))
            .unwrap()
    }

    #[test]
    fn no_arguments_uses_current_directory() {
        let args = parse(&[]);
        assert_eq!(args.source, PathBuf::from("./"));
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn rejects_unknown_aggregation_rule() {
        let result = Args::from_parse_result(Args::try_parse_from([
            "create_packages",
            "--aggregation",
            "majority",
        ]));
        match result {
            Err(crate::error::PackagerError::Cli(CliError::InvalidArguments { reason })) => {
                assert!(reason.contains("majority"));
                assert!(!reason.starts_with("error:"));
            }
            other => panic!("unexpected parse result: {other:?}"),
        }
    }

    #[test]
    fn flags_override_configuration_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(config::CONFIG_FILE_NAME),
            "[package]\nversion = \"1.6.0\"\n\n[packaging]\naggregation = \"sum-of-codes\"\nout_dir = \"pkgout\"\n",
        )
        .unwrap();
        let source = dir.path().to_str().unwrap();

        let from_file = RuntimeConfig::resolve(&parse(&["--source", source])).unwrap();
        assert_eq!(
            from_file.settings().aggregation(),
            AggregationRule::SumOfCodes
        );
        assert_eq!(
            from_file.settings().project_out_directory(),
            dir.path().join("pkgout")
        );
        assert_eq!(from_file.settings().version_string(), "1.6.0");

        let overridden = RuntimeConfig::resolve(&parse(&[
            "--source",
            source,
            "--aggregation",
            "any-failure",
            "--out-dir",
            "/tmp/elsewhere",
        ]))
        .unwrap();
        assert_eq!(
            overridden.settings().aggregation(),
            AggregationRule::AnyFailure
        );
        assert_eq!(
            overridden.settings().project_out_directory(),
            std::path::Path::new("/tmp/elsewhere")
        );
    }

    #[test]
    fn missing_source_fails_validation() {
        let args = parse(&["--source", "/definitely/not/a/real/dir"]);
        assert!(args.validate().is_err());
    }
}
