//! Workflow orchestration behind the CLI subcommands
//!
//! Each step takes its configuration, the project root and any external
//! capability it needs as arguments, so the workflow runs the same with real
//! tools or with test doubles.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::project;
use crate::error::Result;
use crate::gate::{GateConfig, ReleaseGate, UploadPlan};
use crate::git::Repository;
use crate::template;
use crate::tools::{pytest, DocumentationBuilder, TestRunner, Uploader};

/// Files produced by [prepare]
#[derive(Debug, Clone, PartialEq)]
pub struct PrepareOutcome {
    /// Version written into the generated files
    pub version: String,
    pub readme: PathBuf,
    /// Generated documentation config, if a `_conf.py` template exists
    pub doc_conf: Option<PathBuf>,
}

/// Result of a publish run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The tag that authorised the release
    pub tag: String,

    /// Number of distributions handed to the uploader
    pub artifacts: usize,

    /// Whether the upload actually ran
    pub uploaded: bool,
}

/// Value of the configured release-tag environment variable
pub fn release_tag_from_env(config: &Config) -> Option<String> {
    env::var(&config.release.release_tag_env).ok()
}

/// Validate the project and generate README and documentation config
///
/// 1. Project name must be lower-case and dash-separated
/// 2. License and README template must exist
/// 3. README is rendered from its template
/// 4. `<doc_source>/_conf.py` is rendered to `conf.py` when present
pub fn prepare(config: &Config, root: &Path, release_tag: Option<&str>) -> Result<PrepareOutcome> {
    let paths = &config.paths;

    project::validate_name(&config.project.name)?;
    project::check_required_files(root, &[&paths.license, &paths.readme_template])?;

    let is_release = project::is_release(config.release.is_release, release_tag);
    let version = project::declared_version(&config.project.version, is_release)?.to_string();

    let readme = root.join(&paths.readme);
    template::render_file(
        &root.join(&paths.readme_template),
        &readme,
        &template::readme_vars(&version, is_release),
        None,
    )?;

    let doc_source = root.join(&paths.doc_source);
    let conf_template = doc_source.join("_conf.py");
    let doc_conf = if conf_template.exists() {
        let conf = doc_source.join("conf.py");
        template::render_file(
            &conf_template,
            &conf,
            &template::project_vars(config, &version),
            Some(template::GENERATED_HEADER),
        )?;
        Some(conf)
    } else {
        tracing::debug!(template = %conf_template.display(), "no documentation config template");
        None
    };

    Ok(PrepareOutcome {
        version,
        readme,
        doc_conf,
    })
}

/// Run the release gate for the project at `root`
pub fn verify<R: Repository>(
    config: &Config,
    root: &Path,
    repo: &R,
    release_tag: Option<&str>,
) -> Result<UploadPlan> {
    let gate_config = GateConfig::from_config(config, root, release_tag)?;
    tracing::debug!(
        declared = %gate_config.declared_version,
        artifacts = gate_config.artifact_paths.len(),
        "resolved gate inputs"
    );

    ReleaseGate::new(gate_config).verify_and_resolve(repo)
}

/// Hand a verified plan to the uploader
///
/// With `dry_run` nothing is uploaded.
pub fn upload<U: Uploader>(plan: &UploadPlan, uploader: &U, dry_run: bool) -> Result<WorkflowResult> {
    if !dry_run {
        tracing::info!(repository = %plan.repository_url, "uploading distributions");
        uploader.upload(&plan.repository_url, &plan.artifacts)?;
    }

    Ok(WorkflowResult {
        tag: plan.tag.clone(),
        artifacts: plan.artifacts.len(),
        uploaded: !dry_run,
    })
}

/// Build HTML documentation into `paths.doc_output`
pub fn build_docs<B: DocumentationBuilder>(config: &Config, root: &Path, builder: &B) -> Result<PathBuf> {
    let out_dir = root.join(&config.paths.doc_output);
    builder.build(&root.join(&config.paths.doc_source), &out_dir)?;
    Ok(out_dir)
}

/// Run the unit tests with the configured arguments
///
/// `existing_python_path` is the caller's current `PYTHONPATH`, which is kept
/// in front of the project source directories.
pub fn run_tests<T: TestRunner>(
    config: &Config,
    root: &Path,
    runner: &T,
    existing_python_path: Option<&str>,
) -> Result<()> {
    let source_main = root.join(&config.paths.source_main);
    let source_unittest = root.join(&config.paths.source_unittest);

    let args = pytest::pytest_args(&config.tests, &source_main, &source_unittest)?;
    let python_path = pytest::python_path(existing_python_path, &source_main, &source_unittest)?;

    runner.run(&args, &python_path)
}
