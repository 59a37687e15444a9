use crate::error::{ReleaseError, Result};
use std::fmt;
use std::io::ErrorKind;
use std::process::Command;

/// A fully resolved external command line
///
/// Built by the tool adapters so the exact invocation can be inspected or
/// printed (for `--dry-run`) without running anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

impl ToolCommand {
    /// Create a command with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        ToolCommand {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set an environment variable for the child process
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Run the command in the foreground, inheriting stdio
    ///
    /// # Returns
    /// * `Ok(())` if the command exits with code 0
    /// * `Err` if the program cannot be started or exits non-zero
    pub fn run(&self) -> Result<()> {
        tracing::info!(command = %self, "running external tool");

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        let status = cmd.status().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ReleaseError::tool(format!("'{}' not found on PATH", self.program))
            } else {
                ReleaseError::tool(format!("Failed to execute {}: {}", self.program, e))
            }
        })?;

        if !status.success() {
            return Err(ReleaseError::tool(format!(
                "{} failed with exit code {}",
                self.program,
                status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.env {
            write!(f, "{}={} ", key, value)?;
        }
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}
