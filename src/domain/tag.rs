use crate::domain::version::Version;
use crate::error::{ReleaseError, Result};
use git2::Oid;

/// A git tag peeled to the commit it marks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub target: Oid,
}

impl Tag {
    /// Create a new tag pointing at `target`
    pub fn new(name: impl Into<String>, target: Oid) -> Self {
        Tag {
            name: name.into(),
            target,
        }
    }

    /// Extract the version text from the tag (e.g., "v1.2.3" -> "1.2.3")
    ///
    /// Any ref path prefix is dropped first, so "refs/tags/v1.2.3" yields
    /// "1.2.3" as well. One leading `v` is stripped here; the version grammar
    /// allows one more in either case.
    pub fn version_part(&self) -> &str {
        let short = self.name.rsplit('/').next().unwrap_or(&self.name);
        short.strip_prefix('v').unwrap_or(short)
    }

    /// Parse the tag name as a version tag: `v<version>` or `<version>`
    pub fn version(&self) -> Result<Version> {
        Version::parse(self.version_part()).map_err(|_| ReleaseError::MalformedVersionTag {
            tag: self.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str) -> Tag {
        Tag::new(name, Oid::zero())
    }

    #[test]
    fn test_tag_new() {
        let t = tag("v1.2.3");
        assert_eq!(t.name, "v1.2.3");
        assert_eq!(t.target, Oid::zero());
    }

    #[test]
    fn test_tag_version_part() {
        assert_eq!(tag("v1.2.3").version_part(), "1.2.3");
        assert_eq!(tag("1.2.3").version_part(), "1.2.3");
        assert_eq!(tag("refs/tags/v1.2.3").version_part(), "1.2.3");
    }

    #[test]
    fn test_tag_version_with_and_without_prefix() {
        assert_eq!(tag("v1.2.3").version().unwrap(), Version::new(1, 2, 3));
        assert_eq!(tag("1.2.3").version().unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn test_tag_version_normalized_prefixes() {
        assert_eq!(tag("V1.2.3").version().unwrap(), Version::new(1, 2, 3));
        assert_eq!(tag("vv1.2.3").version().unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn test_tag_version_prerelease() {
        let version = tag("v2.0.0rc1").version().unwrap();
        assert!(version.is_prerelease());
        assert!(version < Version::new(2, 0, 0));
    }

    #[test]
    fn test_malformed_tags() {
        for name in ["release-1.2.3", "vvv1.2.3", "latest", "v"] {
            match tag(name).version() {
                Err(ReleaseError::MalformedVersionTag { tag }) => assert_eq!(tag, name),
                other => panic!("expected malformed tag error for {}, got {:?}", name, other),
            }
        }
    }
}
