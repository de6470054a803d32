//! Configuration structures for packaging operations.
//!
//! [`Settings`] is the immutable input to a dispatch. Construct it with
//! [`SettingsBuilder`].

mod builder;
mod core;
mod package;

pub use builder::{DEFAULT_OUT_DIRECTORY, DEFAULT_SOURCE_DIRECTORY, SettingsBuilder};
pub use self::core::Settings;
pub use package::PackageSettings;
