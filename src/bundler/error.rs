//! Error types for packaging operations.
//!
//! Every packager reports failure through [`Error`]. The dispatcher never
//! propagates these out of a dispatch; it folds them into a per-target
//! status instead.

use super::platform::PackageType;
use std::{fmt::Display, path::PathBuf};
use thiserror::Error;

/// Result type alias for packaging operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a single package.
#[derive(Error, Debug)]
pub enum Error {
    /// The target has no packaging implementation yet.
    #[error("{} package doesn't supported yet.", .0.display_name())]
    UnsupportedFormat(PackageType),

    /// An external packaging tool exited unsuccessfully.
    #[error("{tool} failed{}", exit_suffix(.code))]
    ToolFailed {
        /// Tool name (e.g. `dpkg-deb`)
        tool: String,
        /// Exit code, if the process exited normally
        code: Option<i32>,
    },

    /// Filesystem error with context.
    #[error("{context} {}: {error}", .path.display())]
    Fs {
        /// What was being attempted
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        error: std::io::Error,
    },

    /// Plain I/O error.
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    /// Anything else.
    #[error("{0}")]
    GenericError(String),
}

impl Error {
    /// Status code reported for this error in a dispatch.
    ///
    /// Tool failures keep the tool's own exit code; everything else maps to
    /// the `-1` sentinel.
    pub fn status_code(&self) -> i32 {
        match self {
            Error::ToolFailed {
                code: Some(code), ..
            } => *code,
            _ => super::UNSUPPORTED_STATUS,
        }
    }
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => String::from(" (terminated by signal)"),
    }
}

/// Attach a message to an `Option` or foreign error.
pub trait Context<T> {
    /// Convert into [`Result`], using `context` as the error message.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

impl<T, E: std::error::Error> Context<T> for std::result::Result<T, E> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::GenericError(format!("{context}: {e}")))
    }
}

/// Attach a filesystem context and path to I/O errors.
pub trait ErrorExt<T> {
    /// Wrap the error as [`Error::Fs`].
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Return early with a [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::bundler::Error::GenericError(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($fmt, $($arg)*)))
    };
}
