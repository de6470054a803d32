//! Packaging dispatcher.
//!
//! [`Bundler`] visits every [`PackageType`] once, in [`PackageType::ALL`]
//! order, and turns whatever each packager returns into a
//! [`TargetResult`]. A failing target never aborts the dispatch.

use super::{
    checksum::{calculate_sha256, total_size},
    outcome::{BundledArtifact, DispatchReport, TargetResult, TargetStatus},
};
use crate::bundler::{
    PackageType, Result, Settings,
    platform::{Packager, default_packagers},
};
use path_absolutize::Absolutize;
use std::path::PathBuf;

/// Dispatches every packaging target and aggregates the results.
///
/// Holds exactly one [`Packager`] per [`PackageType`]. Use
/// [`Bundler::with_packager`] to replace a stock packager.
///
/// # Examples
///
/// ```no_run
/// use bsdbook_packager::bundler::{Bundler, SettingsBuilder};
///
/// # async fn example() -> bsdbook_packager::bundler::Result<()> {
/// let bundler = Bundler::new(SettingsBuilder::new().build()?);
/// let report = bundler.dispatch().await;
/// println!("outcome: {:?}", report.outcome());
/// # Ok(())
/// # }
/// ```
pub struct Bundler {
    settings: Settings,
    packagers: Vec<Box<dyn Packager>>,
}

impl std::fmt::Debug for Bundler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bundler")
            .field("settings", &self.settings)
            .field(
                "packagers",
                &self
                    .packagers
                    .iter()
                    .map(|p| p.package_type())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Bundler {
    /// Creates a dispatcher with the stock packagers.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            packagers: default_packagers(),
        }
    }

    /// Replaces the packager for `packager.package_type()`.
    pub fn with_packager(mut self, packager: Box<dyn Packager>) -> Self {
        let package_type = packager.package_type();
        match self
            .packagers
            .iter_mut()
            .find(|p| p.package_type() == package_type)
        {
            Some(slot) => *slot = packager,
            None => self.packagers.push(packager),
        }
        self
    }

    /// Returns a reference to the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs every target once, sequentially, and aggregates the results.
    pub async fn dispatch(&self) -> DispatchReport {
        let started_at = chrono::Utc::now();
        let mut results = Vec::with_capacity(PackageType::ALL.len());

        for package_type in PackageType::ALL {
            let status = self.run_target(package_type).await;
            log::debug!("{} -> status {}", package_type, status.code());
            results.push(TargetResult::new(package_type, status));
        }

        let source_directory = self
            .settings
            .source_directory()
            .absolutize()
            .map(|p| p.into_owned())
            .unwrap_or_else(|_| self.settings.source_directory().to_path_buf());

        let report = DispatchReport::new(
            source_directory,
            self.settings.aggregation(),
            results,
            started_at,
            chrono::Utc::now(),
        );
        log::info!(
            "Dispatch of {} finished with {:?} ({} rule) in {} ms",
            report.source_directory().display(),
            report.outcome(),
            report.aggregation().as_str(),
            (report.finished_at() - report.started_at()).num_milliseconds()
        );
        report
    }

    async fn run_target(&self, package_type: PackageType) -> TargetStatus {
        let Some(packager) = self
            .packagers
            .iter()
            .find(|p| p.package_type() == package_type)
        else {
            return TargetStatus::Unsupported;
        };

        let outcome = match packager.bundle_project(&self.settings).await {
            Ok(paths) => describe_artifact(package_type, paths).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(artifact) => {
                log::info!(
                    "✓ {} package: {} bytes, sha256 {}",
                    package_type,
                    artifact.size,
                    artifact.checksum
                );
                TargetStatus::Built { artifact }
            }
            Err(e) => {
                log::warn!("{} package not built: {}", package_type, e);
                TargetStatus::from_error(&e)
            }
        }
    }
}

async fn describe_artifact(
    package_type: PackageType,
    paths: Vec<PathBuf>,
) -> Result<BundledArtifact> {
    let Some(first_path) = paths.first() else {
        crate::bail!(
            "Packager for {} returned no paths - this indicates a packager bug",
            package_type
        );
    };
    let checksum = calculate_sha256(first_path).await?;
    let size = total_size(&paths).await?;

    Ok(BundledArtifact {
        package_type,
        paths,
        size,
        checksum,
    })
}
