//! Project-level rules: naming, required files and release mode

use crate::domain::version::Version;
use crate::error::{ReleaseError, Result};
use std::path::Path;

/// Validate a distribution name: lower-case, dash-separated
pub fn validate_name(name: &str) -> Result<()> {
    if name.chars().any(char::is_whitespace) {
        return Err(ReleaseError::project(
            "Project name may not contain whitespace, use dashes instead",
        ));
    }
    if name.contains('_') {
        return Err(ReleaseError::project(
            "Project name contains underscores, use dashes instead",
        ));
    }
    if name.to_lowercase() != name {
        return Err(ReleaseError::project(
            "Project name contains upper case characters, use lower case instead",
        ));
    }
    Ok(())
}

/// Ensure every file in `required` exists, relative to `root`
pub fn check_required_files<P: AsRef<Path>>(root: &Path, required: &[P]) -> Result<()> {
    for file in required {
        let file = file.as_ref();
        if !root.join(file).exists() {
            return Err(ReleaseError::project(format!(
                "Missing required file: {}",
                file.display()
            )));
        }
    }
    Ok(())
}

/// Decide whether this build is a release build
///
/// An explicit setting wins; otherwise a non-empty release tag from the
/// CI environment marks the build as a release.
pub fn is_release(explicit: Option<bool>, release_tag: Option<&str>) -> bool {
    match explicit {
        Some(value) => value,
        None => release_tag.is_some_and(|tag| !tag.trim().is_empty()),
    }
}

/// Compute the version the build declares
///
/// Non-release builds get a `.dev` suffix so they can never pass the gate
/// against a release tag.
pub fn declared_version(version: &str, is_release: bool) -> Result<Version> {
    let version = version.trim();
    if is_release {
        Version::parse(version)
    } else {
        Version::parse(&format!("{}.dev", version))
    }
}
