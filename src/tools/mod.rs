//! External tool adapters
//!
//! Documentation builds, uploads and test runs are delegated to external
//! programs. Each is reached through a trait so the workflow can be driven
//! with stand-ins in tests:
//! - [DocumentationBuilder]: `sphinx-build`
//! - [Uploader]: `twine upload`
//! - [TestRunner]: `py.test`

pub mod process;
pub mod pytest;
pub mod sphinx;
pub mod twine;

pub use process::ToolCommand;
pub use pytest::PytestRunner;
pub use sphinx::SphinxBuilder;
pub use twine::TwineUploader;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Renders documentation sources into a browsable output directory
pub trait DocumentationBuilder {
    fn build(&self, source_dir: &Path, out_dir: &Path) -> Result<()>;
}

/// Uploads built distributions to a package repository
pub trait Uploader {
    fn upload(&self, repository_url: &str, paths: &[PathBuf]) -> Result<()>;
}

/// Runs the project's unit tests
pub trait TestRunner {
    /// Run with the given arguments and `PYTHONPATH` value
    fn run(&self, args: &[String], python_path: &str) -> Result<()>;
}
