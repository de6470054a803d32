//! Core Settings struct and implementations.

use super::PackageSettings;
use crate::bundler::AggregationRule;
use std::path::{Path, PathBuf};

/// Main settings for packaging operations.
///
/// Central configuration for the dispatcher, constructed via [`SettingsBuilder`].
///
/// # Examples
///
/// ```no_run
/// use bsdbook_packager::bundler::{AggregationRule, SettingsBuilder};
///
/// # fn example() -> bsdbook_packager::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_directory("./")
///     .aggregation(AggregationRule::SumOfCodes)
///     .build()?;
/// assert_eq!(settings.product_name(), "BSDBook");
/// # Ok(())
/// # }
/// ```
///
/// [`SettingsBuilder`]: super::SettingsBuilder
#[derive(Clone, Debug)]
pub struct Settings {
    /// Package metadata.
    package: PackageSettings,

    /// Packaging source root.
    source_directory: PathBuf,

    /// Where packagers write their artifacts.
    project_out_directory: PathBuf,

    /// How per-target results reduce to one outcome.
    aggregation: AggregationRule,
}

impl Settings {
    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.package.product_name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.package.version
    }

    /// Returns the package description.
    pub fn description(&self) -> &str {
        &self.package.description
    }

    /// Returns the package homepage URL.
    pub fn homepage(&self) -> Option<&str> {
        self.package.homepage.as_deref()
    }

    /// Returns the directory packagers read sources from.
    pub fn source_directory(&self) -> &Path {
        &self.source_directory
    }

    /// Returns the output directory for artifacts.
    pub fn project_out_directory(&self) -> &Path {
        &self.project_out_directory
    }

    /// Returns the aggregation rule.
    pub fn aggregation(&self) -> AggregationRule {
        self.aggregation
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        package: PackageSettings,
        source_directory: PathBuf,
        project_out_directory: PathBuf,
        aggregation: AggregationRule,
    ) -> Self {
        Self {
            package,
            source_directory,
            project_out_directory,
            aggregation,
        }
    }
}
