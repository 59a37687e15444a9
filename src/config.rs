use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the project-local configuration file
pub const CONFIG_FILE: &str = "release.toml";

/// Default package index the uploader targets
pub const DEFAULT_UPLOAD_REPOSITORY: &str = "https://pypi.python.org/pypi";

/// Represents the complete configuration for release-gate.
///
/// Contains project metadata, release settings, project layout and test options.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub tests: TestsConfig,
}

/// Project metadata, also exposed as template variables.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ProjectConfig {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub authors: Vec<String>,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub license: String,
}

impl ProjectConfig {
    /// Author names joined for display, e.g. in generated documentation
    pub fn author(&self) -> String {
        self.authors.join(", ")
    }
}

fn default_upload_repository_url() -> String {
    DEFAULT_UPLOAD_REPOSITORY.to_string()
}

fn default_artifact_glob() -> String {
    "target/dist/*/dist/*".to_string()
}

fn default_release_tag_env() -> String {
    "TRAVIS_TAG".to_string()
}

/// Settings that drive the release gate and the upload.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_upload_repository_url")]
    pub upload_repository_url: String,

    #[serde(default = "default_artifact_glob")]
    pub artifact_glob: String,

    /// Overrides release detection from the environment when set
    #[serde(default)]
    pub is_release: Option<bool>,

    /// Environment variable whose non-empty value marks a release build
    #[serde(default = "default_release_tag_env")]
    pub release_tag_env: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            upload_repository_url: default_upload_repository_url(),
            artifact_glob: default_artifact_glob(),
            is_release: None,
            release_tag_env: default_release_tag_env(),
        }
    }
}

fn default_readme_template() -> String {
    "src/project/README.rst".to_string()
}

fn default_readme() -> String {
    "README.rst".to_string()
}

fn default_license() -> String {
    "LICENSE.txt".to_string()
}

fn default_doc_source() -> String {
    "src/doc".to_string()
}

fn default_doc_output() -> String {
    "target/doc".to_string()
}

fn default_source_main() -> String {
    "src/main/python".to_string()
}

fn default_source_unittest() -> String {
    "src/unittest/python".to_string()
}

/// Project layout, relative to the project root.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PathsConfig {
    #[serde(default = "default_readme_template")]
    pub readme_template: String,

    #[serde(default = "default_readme")]
    pub readme: String,

    #[serde(default = "default_license")]
    pub license: String,

    #[serde(default = "default_doc_source")]
    pub doc_source: String,

    #[serde(default = "default_doc_output")]
    pub doc_output: String,

    #[serde(default = "default_source_main")]
    pub source_main: String,

    #[serde(default = "default_source_unittest")]
    pub source_unittest: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            readme_template: default_readme_template(),
            readme: default_readme(),
            license: default_license(),
            doc_source: default_doc_source(),
            doc_output: default_doc_output(),
            source_main: default_source_main(),
            source_unittest: default_source_unittest(),
        }
    }
}

/// Test runner options. `pytest` and `coverage_report` are mutually exclusive.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct TestsConfig {
    /// Raw py.test argument string
    #[serde(default)]
    pub pytest: Option<String>,

    /// Coverage preset; only "travis" is recognised
    #[serde(default)]
    pub coverage_report: Option<String>,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release.toml` in the project root
/// 3. `.release.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `root` - Project root searched for `release.toml`
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>, root: &Path) -> Result<Config> {
    let project_file = root.join(CONFIG_FILE);
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if project_file.exists() {
        fs::read_to_string(project_file)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parse configuration from TOML text
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| ReleaseError::config(e.to_string()))
}
