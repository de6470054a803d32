//! Builder for constructing Settings.

use super::{PackageSettings, Settings};
use crate::bundler::AggregationRule;
use std::path::{Path, PathBuf};

/// Source directory used when none is given.
pub const DEFAULT_SOURCE_DIRECTORY: &str = "./";

/// Output directory name, relative to the source directory.
pub const DEFAULT_OUT_DIRECTORY: &str = "dist";

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use bsdbook_packager::bundler::{PackageSettings, SettingsBuilder};
///
/// # fn example() -> bsdbook_packager::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_directory("/src/bsdbook")
///     .project_out_directory("/tmp/bsdbook-dist")
///     .package_settings(PackageSettings {
///         product_name: "BSDBook".into(),
///         version: "1.6.0".into(),
///         ..Default::default()
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    package_settings: Option<PackageSettings>,
    source_directory: Option<PathBuf>,
    project_out_directory: Option<PathBuf>,
    aggregation: AggregationRule,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets package metadata.
    ///
    /// Default: [`PackageSettings::default`]
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Sets the packaging source root.
    ///
    /// Default: `./`
    pub fn source_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the artifact output directory.
    ///
    /// Default: `<source>/dist`
    pub fn project_out_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_out_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the aggregation rule.
    ///
    /// Default: [`AggregationRule::AnyFailure`]
    pub fn aggregation(mut self, rule: AggregationRule) -> Self {
        self.aggregation = rule;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the product name is empty or the version is not
    /// valid semver.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::Context;

        let package = self.package_settings.unwrap_or_default();
        if package.product_name.trim().is_empty() {
            crate::bail!("product name must not be empty");
        }
        semver::Version::parse(&package.version)
            .context(format!("invalid package version '{}'", package.version))?;

        let source_directory = self
            .source_directory
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIRECTORY));
        let project_out_directory = self
            .project_out_directory
            .unwrap_or_else(|| source_directory.join(DEFAULT_OUT_DIRECTORY));

        Ok(Settings::new(
            package,
            source_directory,
            project_out_directory,
            self.aggregation,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_current_directory() {
        let settings = SettingsBuilder::new().build().unwrap();
        assert_eq!(settings.source_directory(), Path::new("./"));
        assert_eq!(settings.project_out_directory(), Path::new("./dist"));
        assert_eq!(settings.aggregation(), AggregationRule::AnyFailure);
        assert_eq!(settings.product_name(), "BSDBook");
    }

    #[test]
    fn package_metadata_is_exposed() {
        let settings = SettingsBuilder::new()
            .package_settings(PackageSettings {
                product_name: "BSDBook".into(),
                version: "1.6.0".into(),
                description: "Terminal notebook".into(),
                homepage: Some("https://bsdbook.example".into()),
            })
            .build()
            .unwrap();
        assert_eq!(settings.version_string(), "1.6.0");
        assert_eq!(settings.description(), "Terminal notebook");
        assert_eq!(settings.homepage(), Some("https://bsdbook.example"));
    }

    #[test]
    fn rejects_non_semver_version() {
        let err = SettingsBuilder::new()
            .package_settings(PackageSettings {
                version: "1.6".into(),
                ..Default::default()
            })
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("invalid package version '1.6'"));
    }

    #[test]
    fn rejects_empty_product_name() {
        let result = SettingsBuilder::new()
            .package_settings(PackageSettings {
                product_name: "  ".into(),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }
}
