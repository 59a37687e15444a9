use crate::error::{ReleaseError, Result};
use crate::tools::{ToolCommand, Uploader};
use std::path::PathBuf;

/// Package uploader backed by `twine`
pub struct TwineUploader {
    program: String,
}

impl TwineUploader {
    pub fn new() -> Self {
        TwineUploader {
            program: "twine".to_string(),
        }
    }

    /// The invocation `upload` would run
    pub fn command(&self, repository_url: &str, paths: &[PathBuf]) -> ToolCommand {
        ToolCommand::new(&self.program)
            .arg("upload")
            .args(["--repository", repository_url])
            .args(["--repository-url", repository_url])
            .args(paths.iter().map(|p| p.to_string_lossy().into_owned()))
    }
}

impl Default for TwineUploader {
    fn default() -> Self {
        Self::new()
    }
}

impl Uploader for TwineUploader {
    fn upload(&self, repository_url: &str, paths: &[PathBuf]) -> Result<()> {
        if paths.is_empty() {
            return Err(ReleaseError::tool("No distributions to upload"));
        }
        self.command(repository_url, paths).run()
    }
}
