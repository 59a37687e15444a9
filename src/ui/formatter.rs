//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.
//! Colors come from `console`, which drops them when the stream is not a terminal.

use crate::boundary::BoundaryWarning;
use crate::gate::UploadPlan;
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Render an upload plan as plain text lines.
///
/// Kept separate from printing so the layout can be tested.
pub fn format_upload_plan(plan: &UploadPlan) -> Vec<String> {
    let mut lines = vec![
        format!("Tag:        {}", plan.tag),
        if plan.version.is_prerelease() {
            format!("Version:    {} (pre-release)", plan.version)
        } else {
            format!("Version:    {}", plan.version)
        },
        format!("Repository: {}", plan.repository_url),
    ];

    if plan.artifacts.is_empty() {
        lines.push("Artifacts:  (none)".to_string());
    } else {
        lines.push(format!("Artifacts:  {}", plan.artifacts.len()));
        for artifact in &plan.artifacts {
            lines.push(format!("  - {}", artifact.display()));
        }
    }

    lines
}

/// Display the gate verdict and the resolved upload.
pub fn display_upload_plan(plan: &UploadPlan) {
    println!("\n{}", style("Release gate passed").bold());
    for line in format_upload_plan(plan) {
        println!("  {}", line);
    }
    for warning in &plan.warnings {
        display_boundary_warning(warning);
    }
}
