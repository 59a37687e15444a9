//! Git access abstraction layer
//!
//! The release gate only reads history: the HEAD commit, the tag list and
//! the parent links between commits. This module puts those reads behind
//! the [Repository] trait so the gate can run against a real repository or
//! an in-memory fixture.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! ```rust
//! # use release_gate::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let head = repo.head_commit()?;
//! let on_head: Vec<_> = repo
//!     .list_tags()?
//!     .into_iter()
//!     .filter(|tag| tag.target == head)
//!     .collect();
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::{Commit, Tag};
use crate::error::Result;
use git2::Oid;

/// Read-only view of a repository's commit graph and tags
///
/// Implementations must not mutate the repository. Every method returns
/// [crate::error::Result<T>]; `git2::Error` converts into
/// [crate::error::ReleaseError::Git].
pub trait Repository {
    /// Get the OID of the commit currently checked out
    ///
    /// # Returns
    /// * `Ok(Oid)` - The HEAD commit
    /// * `Err` - If HEAD is unborn or does not resolve to a commit
    fn head_commit(&self) -> Result<Oid>;

    /// Get all tags, peeled to their target commits
    ///
    /// Annotated tags are peeled through the tag object. Tags that do not
    /// point at a commit are left out. The list is sorted by tag name.
    fn list_tags(&self) -> Result<Vec<Tag>>;

    /// Look up a commit and its parent links
    ///
    /// # Arguments
    /// * `oid` - Commit to look up
    ///
    /// # Returns
    /// * `Ok(Commit)` - The commit with its ordered parent ids
    /// * `Err` - If the commit does not exist
    fn find_commit(&self, oid: Oid) -> Result<Commit>;
}
