//! Release gate: decides whether HEAD may be published
//!
//! The gate is a fixed pipeline over read-only repository data:
//! 1. HEAD must carry a tag
//! 2. The tag must parse as `v<version>` or `<version>`
//! 3. The tag version must equal the declared project version
//! 4. The declared version is compared with the newest version tagged on an
//!    ancestor; a lower declared version only warns
//!
//! Steps 1-3 fail with [ReleaseError::NoTagOnHead],
//! [ReleaseError::MalformedVersionTag] and [ReleaseError::VersionMismatch].

use crate::artifacts;
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::project;
use crate::domain::{Tag, Version};
use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use git2::Oid;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Inputs the gate consumes, resolved up front from configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GateConfig {
    pub upload_repository_url: String,
    pub declared_version: Version,
    pub artifact_glob: String,
    pub artifact_paths: Vec<PathBuf>,
}

impl GateConfig {
    /// Resolve the gate inputs for the project rooted at `root`
    ///
    /// # Arguments
    /// * `config` - Loaded configuration
    /// * `root` - Project root the artifact glob is relative to
    /// * `release_tag` - Value of the CI release-tag variable, if any
    pub fn from_config(config: &Config, root: &Path, release_tag: Option<&str>) -> Result<Self> {
        if config.project.version.trim().is_empty() {
            return Err(ReleaseError::config("project.version is not set"));
        }

        let is_release = project::is_release(config.release.is_release, release_tag);
        let declared_version = project::declared_version(&config.project.version, is_release)?;
        let artifact_paths = artifacts::locate(root, &config.release.artifact_glob)?;

        Ok(GateConfig {
            upload_repository_url: config.release.upload_repository_url.clone(),
            declared_version,
            artifact_glob: config.release.artifact_glob.clone(),
            artifact_paths,
        })
    }
}

/// Fully resolved upload, produced only when the gate passes
#[derive(Debug, Clone, PartialEq)]
pub struct UploadPlan {
    /// Tag on HEAD that authorised the release
    pub tag: String,
    pub version: Version,
    pub artifacts: Vec<PathBuf>,
    pub repository_url: String,
    pub warnings: Vec<BoundaryWarning>,
}

/// Tag-gated publish check
pub struct ReleaseGate {
    config: GateConfig,
}

impl ReleaseGate {
    /// Create a gate for the given inputs
    pub fn new(config: GateConfig) -> Self {
        ReleaseGate { config }
    }

    /// The inputs this gate was built with
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Verify HEAD against the declared version and resolve the upload
    ///
    /// Reads from `repo` only; calling it twice on an unchanged repository
    /// yields the same result.
    ///
    /// # Returns
    /// * `Ok(UploadPlan)` - HEAD may be published; the plan carries any warnings
    /// * `Err` - One of the three gate failures, or a repository read error
    pub fn verify_and_resolve<R: Repository>(&self, repo: &R) -> Result<UploadPlan> {
        let declared = &self.config.declared_version;
        let mut warnings = Vec::new();

        let head = repo.head_commit()?;
        let tags = repo.list_tags()?;
        tracing::debug!(head = %head, tags = tags.len(), "scanning tags for HEAD");

        let mut on_head = tags.iter().filter(|tag| tag.target == head);
        let head_tag = on_head.next().ok_or(ReleaseError::NoTagOnHead)?;

        let others: Vec<String> = on_head.map(|tag| tag.name.clone()).collect();
        if !others.is_empty() {
            let warning = BoundaryWarning::MultipleHeadTags {
                chosen: head_tag.name.clone(),
                others,
            };
            tracing::debug!(%warning, "gate warning");
            warnings.push(warning);
        }

        let tag_version = head_tag.version()?;
        if &tag_version != declared {
            return Err(ReleaseError::VersionMismatch {
                tag: head_tag.name.clone(),
                tag_version: tag_version.to_string(),
                declared: declared.to_string(),
            });
        }

        let newest_ancestor = newest_ancestor_version(repo, head, &tags)?;
        tracing::debug!(newest_ancestor = %newest_ancestor, "ancestor scan complete");
        if declared < &newest_ancestor {
            let warning = BoundaryWarning::VersionDowngrade {
                declared: declared.to_string(),
                newest_ancestor: newest_ancestor.to_string(),
            };
            tracing::debug!(%warning, "gate warning");
            warnings.push(warning);
        }

        if self.config.artifact_paths.is_empty() {
            let warning = BoundaryWarning::NoArtifacts {
                pattern: self.config.artifact_glob.clone(),
            };
            tracing::debug!(%warning, "gate warning");
            warnings.push(warning);
        }

        Ok(UploadPlan {
            tag: head_tag.name.clone(),
            version: tag_version,
            artifacts: self.config.artifact_paths.clone(),
            repository_url: self.config.upload_repository_url.clone(),
            warnings,
        })
    }
}

/// Collect every commit reachable from `head` through parent links
///
/// `head` itself is not included. Each commit is looked up once, so merge
/// diamonds do not multiply the work.
pub fn ancestors<R: Repository>(repo: &R, head: Oid) -> Result<HashSet<Oid>> {
    let mut visited = HashSet::new();
    let mut pending = repo.find_commit(head)?.parents;

    while let Some(oid) = pending.pop() {
        if !visited.insert(oid) {
            continue;
        }
        pending.extend(repo.find_commit(oid)?.parents);
    }

    visited.remove(&head);
    Ok(visited)
}

/// Highest version among tags on ancestors of `head`, or `0.0.0`
///
/// Tags that do not parse as versions are skipped.
pub fn newest_ancestor_version<R: Repository>(
    repo: &R,
    head: Oid,
    tags: &[Tag],
) -> Result<Version> {
    let ancestors = ancestors(repo, head)?;

    let newest = tags
        .iter()
        .filter(|tag| ancestors.contains(&tag.target))
        .filter_map(|tag| match tag.version() {
            Ok(version) => Some(version),
            Err(_) => {
                tracing::debug!(tag = %tag.name, "ignoring non-version tag on ancestor");
                None
            }
        })
        .max()
        .unwrap_or_else(Version::zero);

    Ok(newest)
}
