//! Packaging targets and the pluggable packager seam.
//!
//! Every [`PackageType`] has exactly one [`Packager`]. The stock packagers
//! live in the per-platform submodules:
//!
//! - `linux::dpkg` - Debian `.deb` packages
//! - `bsd::pkg` - generic `pkg` archives
//! - `macos::mpkg` - macOS meta packages
//! - `windows::exe` - Windows executable installers

pub mod bsd;
pub mod linux;
pub mod macos;
pub mod windows;

use crate::bundler::{Result, Settings};
use async_trait::async_trait;
use std::path::PathBuf;

/// A packaging output format.
///
/// The set is fixed; [`PackageType::ALL`] defines the order in which the
/// dispatcher visits targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    /// Debian package (`.deb`)
    Dpkg,
    /// Generic Unix/BSD package (`.pkg`)
    Pkg,
    /// macOS meta package (`.mpkg`)
    Mpkg,
    /// Windows installer (`.exe`)
    Exe,
}

impl PackageType {
    /// All targets, in dispatch order.
    pub const ALL: [PackageType; 4] = [
        PackageType::Dpkg,
        PackageType::Pkg,
        PackageType::Mpkg,
        PackageType::Exe,
    ];

    /// Short lowercase identifier (`dpkg`, `pkg`, ...).
    pub fn short_name(&self) -> &'static str {
        match self {
            PackageType::Dpkg => "dpkg",
            PackageType::Pkg => "pkg",
            PackageType::Mpkg => "mpkg",
            PackageType::Exe => "exe",
        }
    }

    /// Uppercase name used in console notices (`DPKG`, `PKG`, ...).
    pub fn display_name(&self) -> &'static str {
        match self {
            PackageType::Dpkg => "DPKG",
            PackageType::Pkg => "PKG",
            PackageType::Mpkg => "MPKG",
            PackageType::Exe => "EXE",
        }
    }

    /// File extension of the artifact this target produces.
    pub fn extension(&self) -> &'static str {
        match self {
            PackageType::Dpkg => "deb",
            PackageType::Pkg => "pkg",
            PackageType::Mpkg => "mpkg",
            PackageType::Exe => "exe",
        }
    }
}

impl std::fmt::Display for PackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Builds the artifact for one [`PackageType`].
///
/// Implementations receive the full [`Settings`]; the source directory is
/// [`Settings::source_directory`] and artifacts should be written below
/// [`Settings::project_out_directory`]. A successful build returns the paths
/// of everything it produced (at least one).
#[async_trait]
pub trait Packager: Send + Sync {
    /// The target this packager builds.
    fn package_type(&self) -> PackageType;

    /// Build the package.
    async fn bundle_project(&self, settings: &Settings) -> Result<Vec<PathBuf>>;
}

/// Stock packagers for every target, in dispatch order.
pub fn default_packagers() -> Vec<Box<dyn Packager>> {
    vec![
        Box::new(linux::dpkg::DpkgPackager),
        Box::new(bsd::pkg::PkgPackager),
        Box::new(macos::mpkg::MpkgPackager),
        Box::new(windows::exe::ExePackager),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_packagers_cover_every_target_in_order() {
        let types: Vec<_> = default_packagers()
            .iter()
            .map(|p| p.package_type())
            .collect();
        assert_eq!(types, PackageType::ALL);
    }

    #[test]
    fn names_and_extensions_per_target() {
        let names: Vec<_> = PackageType::ALL
            .iter()
            .map(|t| (t.short_name(), t.display_name(), t.extension()))
            .collect();
        assert_eq!(
            names,
            [
                ("dpkg", "DPKG", "deb"),
                ("pkg", "PKG", "pkg"),
                ("mpkg", "MPKG", "mpkg"),
                ("exe", "EXE", "exe"),
            ]
        );
    }
}
