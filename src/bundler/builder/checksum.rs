//! Artifact size and checksum calculation.
//!
//! Artifacts are usually single files, but a packager may also report a
//! directory (an unpacked staging tree, for instance). Both are hashed.

use crate::{
    bail,
    bundler::{Result, error::ErrorExt},
};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

const CHUNK_SIZE: usize = 8192;

/// Hex SHA-256 of a file, or of a directory tree.
///
/// Directory hashes cover each file's relative path followed by its
/// content, visiting files in sorted path order so the result is stable.
pub async fn calculate_sha256(path: &Path) -> Result<String> {
    let metadata = tokio::fs::metadata(path)
        .await
        .fs_context("reading artifact metadata", path)?;

    if metadata.is_file() {
        file_sha256(path).await
    } else if metadata.is_dir() {
        let dir = path.to_path_buf();
        tokio::task::spawn_blocking(move || directory_sha256(&dir))
            .await
            .map_err(|e| {
                crate::bundler::Error::GenericError(format!("checksum task panicked: {e}"))
            })?
    } else {
        bail!("Path is neither file nor directory: {}", path.display())
    }
}

/// Total size in bytes of every path; directories count their files.
pub async fn total_size(paths: &[PathBuf]) -> Result<u64> {
    let mut size = 0u64;
    for path in paths {
        let metadata = tokio::fs::metadata(path)
            .await
            .fs_context("reading artifact metadata", path)?;
        if metadata.is_dir() {
            size += walkdir::WalkDir::new(path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .filter_map(|e| e.metadata().ok())
                .map(|m| m.len())
                .sum::<u64>();
        } else {
            size += metadata.len();
        }
    }
    Ok(size)
}

async fn file_sha256(path: &Path) -> Result<String> {
    let mut file = tokio::fs::File::open(path)
        .await
        .fs_context("opening artifact for hashing", path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading artifact for hashing", path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

fn directory_sha256(dir: &Path) -> Result<String> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();
    files.sort();

    let mut hasher = Sha256::new();
    for file in files {
        if let Ok(rel_path) = file.strip_prefix(dir) {
            hasher.update(rel_path.to_string_lossy().as_bytes());
        }
        let mut reader =
            std::fs::File::open(&file).fs_context("opening artifact for hashing", &file)?;
        std::io::copy(&mut reader, &mut hasher).fs_context("reading artifact for hashing", &file)?;
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // sha256("hello")
    const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

    #[tokio::test]
    async fn hashes_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.deb");
        std::fs::write(&file, "hello").unwrap();

        assert_eq!(calculate_sha256(&file).await.unwrap(), HELLO_SHA256);
        assert_eq!(total_size(&[file]).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn directory_hash_depends_on_layout() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        std::fs::write(a.path().join("x"), "hello").unwrap();
        std::fs::write(b.path().join("y"), "hello").unwrap();

        let hash_a = calculate_sha256(a.path()).await.unwrap();
        let hash_b = calculate_sha256(b.path()).await.unwrap();
        assert_ne!(hash_a, hash_b);
        assert_eq!(hash_a, calculate_sha256(a.path()).await.unwrap());
        assert_eq!(total_size(&[a.path().to_path_buf()]).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(calculate_sha256(&dir.path().join("nope")).await.is_err());
    }
}
