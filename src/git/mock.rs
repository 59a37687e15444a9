use crate::domain::{Commit, Tag};
use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use git2::Oid;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
///
/// Records how often each commit is looked up so traversal tests can assert
/// that no commit is visited twice.
pub struct MockRepository {
    commits: HashMap<Oid, Commit>,
    tags: Vec<Tag>,
    head: Option<Oid>,
    lookups: RefCell<HashMap<Oid, usize>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: HashMap::new(),
            tags: Vec::new(),
            head: None,
            lookups: RefCell::new(HashMap::new()),
        }
    }

    /// Add a commit with the given parents
    pub fn add_commit(&mut self, oid: Oid, parents: &[Oid]) {
        self.commits.insert(oid, Commit::new(oid, parents.to_vec()));
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.push(Tag::new(name, oid));
        self.tags.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Set the checked-out commit
    pub fn set_head(&mut self, oid: Oid) {
        self.head = Some(oid);
    }

    /// Number of times `oid` was looked up through [Repository::find_commit]
    pub fn lookup_count(&self, oid: Oid) -> usize {
        self.lookups.borrow().get(&oid).copied().unwrap_or(0)
    }

    /// Highest lookup count over all commits
    pub fn max_lookup_count(&self) -> usize {
        self.lookups.borrow().values().copied().max().unwrap_or(0)
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn head_commit(&self) -> Result<Oid> {
        self.head
            .ok_or_else(|| ReleaseError::config("Repository has no commits yet"))
    }

    fn list_tags(&self) -> Result<Vec<Tag>> {
        Ok(self.tags.clone())
    }

    fn find_commit(&self, oid: Oid) -> Result<Commit> {
        *self.lookups.borrow_mut().entry(oid).or_insert(0) += 1;
        self.commits.get(&oid).cloned().ok_or_else(|| {
            ReleaseError::Git(git2::Error::from_str(&format!("Commit not found: {}", oid)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(n: u8) -> Oid {
        Oid::from_bytes(&[n; 20]).unwrap()
    }

    #[test]
    fn test_mock_repository_head() {
        let mut repo = MockRepository::new();
        assert!(repo.head_commit().is_err());

        repo.add_commit(oid(1), &[]);
        repo.set_head(oid(1));
        assert_eq!(repo.head_commit().unwrap(), oid(1));
    }

    #[test]
    fn test_mock_repository_tags_sorted() {
        let mut repo = MockRepository::new();
        repo.add_tag("v2.0.0", oid(2));
        repo.add_tag("v1.0.0", oid(1));

        let names: Vec<String> = repo
            .list_tags()
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["v1.0.0", "v2.0.0"]);
    }

    #[test]
    fn test_mock_repository_find_commit_counts_lookups() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1), &[]);
        repo.add_commit(oid(2), &[oid(1)]);

        assert_eq!(repo.find_commit(oid(2)).unwrap().parents, vec![oid(1)]);
        repo.find_commit(oid(2)).unwrap();
        assert_eq!(repo.lookup_count(oid(2)), 2);
        assert_eq!(repo.lookup_count(oid(1)), 0);
        assert_eq!(repo.max_lookup_count(), 2);
    }

    #[test]
    fn test_mock_repository_missing_commit() {
        let repo = MockRepository::default();
        assert!(repo.find_commit(oid(9)).is_err());
    }
}
