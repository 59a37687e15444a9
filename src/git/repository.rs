use crate::domain::{Commit, Tag};
use crate::error::{ReleaseError, Result};
use git2::{ErrorCode, Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn head_commit(&self) -> Result<Oid> {
        let head = self.repo.head().map_err(|e| {
            if e.code() == ErrorCode::UnbornBranch {
                ReleaseError::config("Repository has no commits yet")
            } else {
                ReleaseError::Git(e)
            }
        })?;

        Ok(head.peel_to_commit()?.id())
    }

    fn list_tags(&self) -> Result<Vec<Tag>> {
        let names = self.repo.tag_names(None)?;

        let mut tags = Vec::new();
        for name in names.iter().flatten() {
            let reference = self.repo.find_reference(&format!("refs/tags/{}", name))?;

            match reference.peel_to_commit() {
                Ok(commit) => tags.push(Tag::new(name, commit.id())),
                Err(e) => {
                    tracing::debug!(tag = name, error = %e, "skipping tag that does not mark a commit");
                }
            }
        }

        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }

    fn find_commit(&self, oid: Oid) -> Result<Commit> {
        let commit = self.repo.find_commit(oid)?;

        Ok(Commit::new(oid, commit.parent_ids().collect()))
    }
}
