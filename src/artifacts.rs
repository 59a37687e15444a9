//! Locating built distributions on disk

use crate::error::{ReleaseError, Result};
use std::path::{Path, PathBuf};

/// Expand `pattern` relative to `root` into the matching files, sorted
///
/// Directories matched by the pattern are skipped. An absolute pattern is
/// used as is.
pub fn locate(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full = if Path::new(pattern).is_absolute() {
        PathBuf::from(pattern)
    } else {
        root.join(pattern)
    };
    let full = full.to_string_lossy();

    let entries = glob::glob(&full)
        .map_err(|e| ReleaseError::config(format!("Invalid artifact glob '{}': {}", pattern, e)))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ReleaseError::Io(e.into_error()))?;
        if path.is_file() {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_locate_distributions() {
        let dir = TempDir::new().unwrap();
        let dist = dir.path().join("target/dist/demo-1.0.0/dist");
        fs::create_dir_all(&dist).unwrap();
        fs::write(dist.join("demo-1.0.0.tar.gz"), "sdist").unwrap();
        fs::write(dist.join("demo-1.0.0-py3-none-any.whl"), "wheel").unwrap();
        fs::create_dir(dist.join("nested")).unwrap();

        let found = locate(dir.path(), "target/dist/*/dist/*").unwrap();
        assert_eq!(
            found,
            vec![
                dist.join("demo-1.0.0-py3-none-any.whl"),
                dist.join("demo-1.0.0.tar.gz"),
            ]
        );
    }

    #[test]
    fn test_locate_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(locate(dir.path(), "dist/*").unwrap().is_empty());
    }

    #[test]
    fn test_locate_invalid_pattern() {
        let dir = TempDir::new().unwrap();
        assert!(locate(dir.path(), "dist/[").is_err());
    }
}
