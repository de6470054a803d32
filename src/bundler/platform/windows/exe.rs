//! Windows executable installer creation.
//!
//! The intended toolchain is NSIS (`makensis`), which also runs on Linux
//! and macOS for cross-builds.

use crate::bundler::{
    Error, Result,
    builder::tool_detection::HAS_MAKENSIS,
    platform::{PackageType, Packager},
    settings::Settings,
};
use async_trait::async_trait;
use std::path::PathBuf;

/// Packager for the `exe` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExePackager;

#[async_trait]
impl Packager for ExePackager {
    fn package_type(&self) -> PackageType {
        PackageType::Exe
    }

    /// Would produce `<out>/bundle/exe/<name>_<version>-setup.exe`.
    async fn bundle_project(&self, settings: &Settings) -> Result<Vec<PathBuf>> {
        log::info!("Building Windows installer for {}", settings.product_name());

        if *HAS_MAKENSIS {
            log::debug!("makensis detected - installer script generation is not implemented");
        } else {
            log::debug!("makensis not available - skipping Windows installer");
        }

        Err(Error::UnsupportedFormat(PackageType::Exe))
    }
}
