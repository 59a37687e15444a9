use std::fmt;

/// Warnings raised while gating a release.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Declared version is lower than a version tagged on an ancestor commit
    VersionDowngrade {
        declared: String,
        newest_ancestor: String,
    },
    /// More than one tag marks HEAD; the first by name was used
    MultipleHeadTags { chosen: String, others: Vec<String> },
    /// The artifact glob matched nothing, so there is nothing to upload
    NoArtifacts { pattern: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::VersionDowngrade {
                declared,
                newest_ancestor,
            } => {
                write!(
                    f,
                    "project version ({}) is less than that of an ancestor commit ({})",
                    declared, newest_ancestor
                )
            }
            BoundaryWarning::MultipleHeadTags { chosen, others } => {
                write!(
                    f,
                    "Current commit has several tags; using '{}' and ignoring {}",
                    chosen,
                    others
                        .iter()
                        .map(|t| format!("'{}'", t))
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            BoundaryWarning::NoArtifacts { pattern } => {
                write!(f, "No distributions match '{}'", pattern)
            }
        }
    }
}
