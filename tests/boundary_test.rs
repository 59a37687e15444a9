use release_gate::boundary::BoundaryWarning;
use release_gate::ui;

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_downgrade_display() {
    let warning = BoundaryWarning::VersionDowngrade {
        declared: "1.0.0".to_string(),
        newest_ancestor: "1.5.0".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("less than that of an ancestor commit"),
        "Message should describe the downgrade, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("(1.0.0)") && display_msg.contains("(1.5.0)"),
        "Message should contain both versions, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_multiple_head_tags_display() {
    let warning = BoundaryWarning::MultipleHeadTags {
        chosen: "1.0.0".to_string(),
        others: vec!["v1.0.0".to_string()],
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("several tags"),
        "Message should flag the ambiguity, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("'1.0.0'") && display_msg.contains("'v1.0.0'"),
        "Message should name every tag, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_no_artifacts_display() {
    let warning = BoundaryWarning::NoArtifacts {
        pattern: "target/dist/*/dist/*".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("target/dist/*/dist/*"),
        "Message should contain the glob, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_equality() {
    let a = BoundaryWarning::NoArtifacts {
        pattern: "dist/*".to_string(),
    };
    let b = a.clone();
    assert_eq!(a, b);
    assert_ne!(
        a,
        BoundaryWarning::NoArtifacts {
            pattern: "build/*".to_string()
        }
    );
}

// ============================================================================
// UI display of warnings
// ============================================================================

#[test]
fn test_display_boundary_warnings_do_not_panic() {
    let warnings = vec![
        BoundaryWarning::VersionDowngrade {
            declared: "0.1.0".to_string(),
            newest_ancestor: "0.2.0".to_string(),
        },
        BoundaryWarning::MultipleHeadTags {
            chosen: "0.1.0".to_string(),
            others: vec![],
        },
        BoundaryWarning::NoArtifacts {
            pattern: "dist/*".to_string(),
        },
    ];

    for warning in &warnings {
        ui::display_boundary_warning(warning);
    }
}
