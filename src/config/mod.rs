//! Packaging configuration from `packaging.toml`.
//!
//! The file is optional. When present in the source directory it supplies
//! package metadata and packaging defaults:
//!
//! ```toml
//! [package]
//! name = "BSDBook"
//! version = "1.6.0"
//! description = "Terminal notebook"
//!
//! [packaging]
//! out_dir = "dist"
//! aggregation = "sum-of-codes"
//! ```

use crate::bundler::{AggregationRule, PackageSettings};
use crate::error::{CliError, PackagerError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name looked up in the source directory.
pub const CONFIG_FILE_NAME: &str = "packaging.toml";

/// Parsed `packaging.toml`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PackagingConfig {
    /// `[package]` table
    #[serde(default)]
    pub package: PackageSection,

    /// `[packaging]` table
    #[serde(default)]
    pub packaging: PackagingSection,
}

/// `[package]` table of `packaging.toml`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PackageSection {
    /// Product name
    pub name: Option<String>,
    /// Semver version
    pub version: Option<String>,
    /// One-line description
    pub description: Option<String>,
    /// Homepage URL
    pub homepage: Option<String>,
}

/// `[packaging]` table of `packaging.toml`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PackagingSection {
    /// Output directory; relative paths resolve against the source directory.
    pub out_dir: Option<PathBuf>,
    /// Aggregation rule
    pub aggregation: Option<AggregationRule>,
}

impl PackagingConfig {
    /// Package metadata, falling back to defaults for missing keys.
    pub fn package_settings(&self) -> PackageSettings {
        let defaults = PackageSettings::default();
        PackageSettings {
            product_name: self
                .package
                .name
                .clone()
                .unwrap_or(defaults.product_name),
            version: self.package.version.clone().unwrap_or(defaults.version),
            description: self
                .package
                .description
                .clone()
                .unwrap_or(defaults.description),
            homepage: self.package.homepage.clone().or(defaults.homepage),
        }
    }

    /// Configured output directory, resolved against `source_dir`.
    pub fn out_dir(&self, source_dir: &Path) -> Option<PathBuf> {
        self.packaging.out_dir.as_ref().map(|dir| {
            if dir.is_absolute() {
                dir.clone()
            } else {
                source_dir.join(dir)
            }
        })
    }

    /// Configured aggregation rule.
    pub fn aggregation(&self) -> Option<AggregationRule> {
        self.packaging.aggregation
    }
}

/// Loads `path`, returning defaults if the file does not exist.
pub fn load_config(path: &Path) -> Result<PackagingConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No {} found, using defaults", path.display());
            return Ok(PackagingConfig::default());
        }
        Err(e) => {
            return Err(PackagerError::Cli(CliError::ExecutionFailed {
                command: "read_config".to_string(),
                reason: format!("Failed to read {}: {}", path.display(), e),
            }));
        }
    };

    let config: PackagingConfig =
        toml::from_str(&contents).map_err(|e| PackagerError::Config {
            path: path.to_path_buf(),
            source: e,
        })?;

    log::info!("Loaded packaging configuration from {}", path.display());
    Ok(config)
}

/// Loads `packaging.toml` from `source_dir`.
pub fn load_config_from_source(source_dir: &Path) -> Result<PackagingConfig> {
    load_config(&source_dir.join(CONFIG_FILE_NAME))
}
