//! Debian package (.deb) creation.
//!
//! Not implemented yet. A real implementation would stage the source tree
//! under `<out>/bundle/dpkg/<name>_<version>/`, write `DEBIAN/control` and
//! hand the staging directory to `dpkg-deb --build`.

use crate::bundler::{
    Error, Result,
    builder::tool_detection::HAS_DPKG_DEB,
    platform::{PackageType, Packager},
    settings::Settings,
};
use async_trait::async_trait;
use std::path::PathBuf;

/// Packager for the `dpkg` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct DpkgPackager;

#[async_trait]
impl Packager for DpkgPackager {
    fn package_type(&self) -> PackageType {
        PackageType::Dpkg
    }

    async fn bundle_project(&self, settings: &Settings) -> Result<Vec<PathBuf>> {
        log::info!(
            "Building Debian package for {} from {}",
            settings.product_name(),
            settings.source_directory().display()
        );

        log::debug!(
            "control fields: Package: {} Version: {} Description: {} Homepage: {}",
            settings.product_name(),
            settings.version_string(),
            settings.description(),
            settings.homepage().unwrap_or("-")
        );

        if *HAS_DPKG_DEB {
            log::debug!("dpkg-deb detected but Debian packaging is not implemented");
        }

        Err(Error::UnsupportedFormat(PackageType::Dpkg))
    }
}
