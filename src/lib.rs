//! Multi-target packaging dispatcher for BSDBook.
//!
//! Builds packages for every supported target:
//! - Debian packages (.deb)
//! - BSD `pkg` archives
//! - macOS meta packages (.mpkg)
//! - Windows installers (.exe)
//!
//! and reduces the per-target results to one verdict. It can be used both
//! as the `create_packages` CLI and as a library dependency; real packaging
//! logic plugs in through [`bundler::Packager`].

pub mod bundler;
pub mod cli;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use error::{CliError, PackagerError, Result};
