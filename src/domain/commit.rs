use git2::Oid;

/// A commit reduced to what the gate needs: its id and its parents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub id: Oid,
    pub parents: Vec<Oid>,
}

impl Commit {
    /// Create a new commit record
    pub fn new(id: Oid, parents: Vec<Oid>) -> Self {
        Commit { id, parents }
    }
}
