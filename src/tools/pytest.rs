use crate::config::TestsConfig;
use crate::error::{ReleaseError, Result};
use crate::tools::{TestRunner, ToolCommand};
use std::path::{Path, PathBuf};

/// Test runner backed by `py.test`
pub struct PytestRunner {
    program: String,
}

impl PytestRunner {
    pub fn new() -> Self {
        PytestRunner {
            program: "py.test".to_string(),
        }
    }

    /// The invocation `run` would perform
    pub fn command(&self, args: &[String], python_path: &str) -> ToolCommand {
        ToolCommand::new(&self.program)
            .args(args.iter().cloned())
            .env("PYTHONPATH", python_path)
    }
}

impl Default for PytestRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRunner for PytestRunner {
    fn run(&self, args: &[String], python_path: &str) -> Result<()> {
        self.command(args, python_path).run()
    }
}

/// Assemble py.test arguments from the test settings
///
/// `coverage_report` and `pytest` may not both be set; an empty value counts
/// as unset. The only coverage preset is "travis". Without either, tests stop
/// at the first failure and rerun last failures first.
pub fn pytest_args(tests: &TestsConfig, source_main: &Path, source_unittest: &Path) -> Result<Vec<String>> {
    let unittest = source_unittest.to_string_lossy().into_owned();

    let coverage_report = tests.coverage_report.as_deref().filter(|s| !s.is_empty());
    let pytest = tests.pytest.as_deref().filter(|s| !s.is_empty());

    match (coverage_report, pytest) {
        (Some(_), Some(_)) => Err(ReleaseError::config(
            "Both coverage_report and pytest are given. They are mutually exclusive. Remove one.",
        )),
        (Some("travis"), None) => Ok(vec![
            "--cov".to_string(),
            source_main.to_string_lossy().into_owned(),
            "--cov-report".to_string(),
            "term-missing".to_string(),
            unittest,
        ]),
        (Some(report), None) => Err(ReleaseError::config(format!(
            "Invalid value for coverage_report: {}. Expected \"travis\".",
            report
        ))),
        (None, Some(args)) => Ok(args.split_whitespace().map(str::to_string).collect()),
        (None, None) => Ok(vec![
            "--maxfail".to_string(),
            "1".to_string(),
            "-v".to_string(),
            "--lf".to_string(),
            unittest,
        ]),
    }
}

/// Build `PYTHONPATH`: any existing value, then the main and test sources
pub fn python_path(existing: Option<&str>, source_main: &Path, source_unittest: &Path) -> Result<String> {
    let mut parts: Vec<PathBuf> = match existing.filter(|s| !s.is_empty()) {
        Some(existing) => std::env::split_paths(existing).collect(),
        None => Vec::new(),
    };
    parts.push(source_main.to_path_buf());
    parts.push(source_unittest.to_path_buf());

    let joined = std::env::join_paths(parts)
        .map_err(|e| ReleaseError::config(format!("Cannot build PYTHONPATH: {}", e)))?;
    Ok(joined.to_string_lossy().into_owned())
}
