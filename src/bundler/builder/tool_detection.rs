//! External tool detection and availability checking.
//!
//! Each target eventually drives an external packaging tool. Probes are
//! evaluated lazily and cached for the lifetime of the process.

use std::sync::LazyLock;

/// `dpkg-deb`, used to assemble Debian packages.
pub static HAS_DPKG_DEB: LazyLock<bool> = LazyLock::new(|| probe("dpkg-deb", Some("--version")));

/// `pkg`, used to create BSD packages.
pub static HAS_PKG: LazyLock<bool> = LazyLock::new(|| probe("pkg", Some("-v")));

/// `productbuild`, used to create macOS meta packages.
pub static HAS_PRODUCTBUILD: LazyLock<bool> = LazyLock::new(|| probe("productbuild", None));

/// `makensis`, used to compile Windows installers.
pub static HAS_MAKENSIS: LazyLock<bool> = LazyLock::new(|| probe("makensis", Some("-VERSION")));

/// Looks `tool` up in PATH and, if `version_arg` is given, checks that it runs.
fn probe(tool: &str, version_arg: Option<&str>) -> bool {
    let path = match which::which(tool) {
        Ok(path) => path,
        Err(e) => {
            log::debug!("{} not found in PATH: {}", tool, e);
            return false;
        }
    };
    log::debug!("Found {} at: {}", tool, path.display());

    let Some(arg) = version_arg else {
        return true;
    };

    match std::process::Command::new(&path).arg(arg).output() {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout);
            log::info!("✓ {} available: {}", tool, version.trim());
            true
        }
        Ok(output) => {
            log::warn!(
                "{} found at {} but {} check failed (exit code: {:?}). Stderr: {}",
                tool,
                path.display(),
                arg,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr)
            );
            false
        }
        Err(e) => {
            log::warn!(
                "{} found at {} but failed to execute: {}. Check file permissions.",
                tool,
                path.display(),
                e
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tool_is_reported_unavailable() {
        assert!(!probe("bsdbook-packager-no-such-tool", Some("--version")));
    }
}
