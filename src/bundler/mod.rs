//! Multi-target packaging.
//!
//! [`Bundler`] runs one [`Packager`] per [`PackageType`] and reduces the
//! results to a [`DispatchOutcome`] according to the configured
//! [`AggregationRule`].

pub mod builder;
pub mod error;
pub mod platform;
pub mod settings;

pub use builder::{
    AggregationRule, BundledArtifact, Bundler, DispatchOutcome, DispatchReport, SUCCESS_STATUS,
    TargetResult, TargetStatus, UNSUPPORTED_STATUS,
};
pub use error::{Error, Result};
pub use platform::{PackageType, Packager, default_packagers};
pub use settings::{PackageSettings, Settings, SettingsBuilder};
