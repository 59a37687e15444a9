//! `$name` placeholder substitution for README and documentation sources
//!
//! Placeholders are `$name` or `${name}`; `$$` is a literal dollar sign.
//! Unknown placeholders and stray dollar signs are left untouched.

use crate::config::Config;
use crate::error::Result;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// First line written to generated documentation configuration
pub const GENERATED_HEADER: &str =
    "# Generated by release-gate, do not edit, edit _conf.py instead.";

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\$(?:(?P<escaped>\$)|(?P<named>[_a-z][_a-z0-9]*)|\{(?P<braced>[_a-z][_a-z0-9]*)\})")
            .expect("placeholder pattern is valid")
    })
}

/// Replace placeholders in `text` with values from `vars`
pub fn safe_substitute(text: &str, vars: &HashMap<String, String>) -> String {
    placeholder_regex()
        .replace_all(text, |caps: &Captures| {
            if caps.name("escaped").is_some() {
                return "$".to_string();
            }
            let name = caps
                .name("named")
                .or_else(|| caps.name("braced"))
                .map(|m| m.as_str())
                .unwrap_or_default();
            match vars.get(name) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Variables available to the README template
///
/// Release builds point links at the released version; other builds point at
/// `latest` documentation and the `master` branch.
pub fn readme_vars(version: &str, is_release: bool) -> HashMap<String, String> {
    let (latest, master) = if is_release {
        (version.to_string(), version.to_string())
    } else {
        ("latest".to_string(), "master".to_string())
    };

    HashMap::from([
        ("latest_or_version".to_string(), latest),
        ("master_or_version".to_string(), master),
    ])
}

/// Project properties exposed to the documentation configuration template
pub fn project_vars(config: &Config, version: &str) -> HashMap<String, String> {
    let project = &config.project;
    HashMap::from([
        ("name".to_string(), project.name.clone()),
        ("version".to_string(), version.to_string()),
        ("author".to_string(), project.author()),
        ("summary".to_string(), project.summary.clone()),
        ("url".to_string(), project.url.clone()),
        ("license".to_string(), project.license.clone()),
    ])
}

/// Render `template` into `output`, returning the rendered text
pub fn render_file(
    template: &Path,
    output: &Path,
    vars: &HashMap<String, String>,
    header: Option<&str>,
) -> Result<String> {
    let source = fs::read_to_string(template)?;
    let mut rendered = safe_substitute(&source, vars);
    if let Some(header) = header {
        rendered = format!("{}\n\n{}", header, rendered);
    }

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, &rendered)?;
    tracing::debug!(template = %template.display(), output = %output.display(), "rendered template");

    Ok(rendered)
}
