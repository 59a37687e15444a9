use crate::error::Result;
use crate::tools::{DocumentationBuilder, ToolCommand};
use std::path::Path;

/// HTML documentation builder backed by `sphinx-build`
pub struct SphinxBuilder {
    program: String,
    jobs: usize,
}

impl SphinxBuilder {
    /// Builder using every available CPU
    pub fn new() -> Self {
        let jobs = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::with_jobs(jobs)
    }

    /// Builder with an explicit parallel job count
    pub fn with_jobs(jobs: usize) -> Self {
        SphinxBuilder {
            program: "sphinx-build".to_string(),
            jobs: jobs.max(1),
        }
    }

    /// The invocation `build` would run
    pub fn command(&self, source_dir: &Path, out_dir: &Path) -> ToolCommand {
        ToolCommand::new(&self.program)
            .args(["-j".to_string(), self.jobs.to_string()])
            .args(["-b", "html"])
            .arg(source_dir.to_string_lossy())
            .arg(out_dir.to_string_lossy())
    }
}

impl Default for SphinxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentationBuilder for SphinxBuilder {
    fn build(&self, source_dir: &Path, out_dir: &Path) -> Result<()> {
        self.command(source_dir, out_dir).run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphinx_command() {
        let cmd = SphinxBuilder::with_jobs(4).command(Path::new("src/doc"), Path::new("target/doc"));
        assert_eq!(cmd.program, "sphinx-build");
        assert_eq!(
            cmd.args,
            vec!["-j", "4", "-b", "html", "src/doc", "target/doc"]
        );
    }

    #[test]
    fn test_at_least_one_job() {
        let cmd = SphinxBuilder::with_jobs(0).command(Path::new("a"), Path::new("b"));
        assert_eq!(cmd.args[1], "1");
    }
}
