use thiserror::Error;

/// Unified error type for release-gate operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Current commit has no tag. To publish, it should have a tag named \"{{version}}\".")]
    NoTagOnHead,

    #[error("Current commit has tag ({tag}). To release, it should have a tag named \"{{version}}\".")]
    MalformedVersionTag { tag: String },

    #[error("Version tag ({tag}) of current commit does not equal project version ({declared}).")]
    VersionMismatch {
        tag: String,
        tag_version: String,
        declared: String,
    },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Project error: {0}")]
    Project(String),

    #[error("External tool failed: {0}")]
    Tool(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-gate
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }

    /// Create a project validation error with context
    pub fn project(msg: impl Into<String>) -> Self {
        ReleaseError::Project(msg.into())
    }

    /// Create an external tool error with context
    pub fn tool(msg: impl Into<String>) -> Self {
        ReleaseError::Tool(msg.into())
    }

    /// Whether this error is one of the gate's fatal verdicts
    pub fn is_gate_failure(&self) -> bool {
        matches!(
            self,
            ReleaseError::NoTagOnHead
                | ReleaseError::MalformedVersionTag { .. }
                | ReleaseError::VersionMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_no_tag_on_head_message() {
        let msg = ReleaseError::NoTagOnHead.to_string();
        assert!(msg.contains("Current commit has no tag"));
        assert!(msg.contains("\"{version}\""));
    }

    #[test]
    fn test_malformed_tag_names_the_tag() {
        let err = ReleaseError::MalformedVersionTag {
            tag: "release-1.2.3".to_string(),
        };
        assert!(err.to_string().contains("(release-1.2.3)"));
    }

    #[test]
    fn test_version_mismatch_names_both_sides() {
        let err = ReleaseError::VersionMismatch {
            tag: "v1.2.0".to_string(),
            tag_version: "1.2.0".to_string(),
            declared: "1.3.0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("v1.2.0"));
        assert!(msg.contains("1.3.0"));
    }

    #[test]
    fn test_gate_failure_classification() {
        assert!(ReleaseError::NoTagOnHead.is_gate_failure());
        assert!(ReleaseError::MalformedVersionTag { tag: "x".into() }.is_gate_failure());
        assert!(!ReleaseError::tool("twine").is_gate_failure());
        assert!(!ReleaseError::config("x").is_gate_failure());
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseError::config("x"), "Configuration error"),
            (ReleaseError::version("x"), "Version parsing error"),
            (ReleaseError::project("x"), "Project error"),
            (ReleaseError::tool("x"), "External tool failed"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
