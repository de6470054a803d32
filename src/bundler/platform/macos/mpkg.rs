//! macOS meta package (.mpkg) creation.
//!
//! Meta packages wrap one or more component packages behind a single
//! installer. Building one requires `productbuild`, which only ships with
//! Xcode, so the target is unsupported everywhere for now.

use crate::bundler::{
    Error, Result,
    builder::tool_detection::HAS_PRODUCTBUILD,
    platform::{PackageType, Packager},
    settings::Settings,
};
use async_trait::async_trait;
use std::path::PathBuf;

/// Packager for the `mpkg` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct MpkgPackager;

#[async_trait]
impl Packager for MpkgPackager {
    fn package_type(&self) -> PackageType {
        PackageType::Mpkg
    }

    async fn bundle_project(&self, settings: &Settings) -> Result<Vec<PathBuf>> {
        log::info!("Creating macOS meta package for {}", settings.product_name());

        if !*HAS_PRODUCTBUILD {
            log::debug!("productbuild not available on this host");
        }

        Err(Error::UnsupportedFormat(PackageType::Mpkg))
    }
}
