//! Generic `pkg` archive creation.

use crate::bundler::{
    Error, Result,
    builder::tool_detection::HAS_PKG,
    platform::{PackageType, Packager},
    settings::Settings,
};
use async_trait::async_trait;
use std::path::PathBuf;

/// Packager for the `pkg` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct PkgPackager;

#[async_trait]
impl Packager for PkgPackager {
    fn package_type(&self) -> PackageType {
        PackageType::Pkg
    }

    async fn bundle_project(&self, settings: &Settings) -> Result<Vec<PathBuf>> {
        log::info!("Building pkg archive for {}", settings.product_name());
        log::debug!("pkg tool available: {}", *HAS_PKG);

        Err(Error::UnsupportedFormat(PackageType::Pkg))
    }
}
