//! Package metadata and configuration.

/// Package metadata shared by every target.
///
/// Usually read from the `[package]` table of `packaging.toml`.
///
/// # Examples
///
/// ```no_run
/// use bsdbook_packager::bundler::PackageSettings;
///
/// let settings = PackageSettings {
///     product_name: "BSDBook".into(),
///     version: "1.6.0".into(),
///     description: "Terminal notebook".into(),
///     homepage: None,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSettings {
    /// Product name displayed to users.
    pub product_name: String,

    /// Version string in semantic versioning format.
    ///
    /// Example: "1.6.0", "0.2.3-beta.1"
    pub version: String,

    /// Brief description of the application.
    pub description: String,

    /// Homepage URL for the application.
    ///
    /// Default: None
    pub homepage: Option<String>,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            product_name: "BSDBook".into(),
            version: "0.1.0".into(),
            description: String::new(),
            homepage: None,
        }
    }
}
