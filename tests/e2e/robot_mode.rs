//! Robot-mode (JSON) end-to-end tests.

use crate::common::assertions::assert_json_has_fields;
use crate::common::cli::CliRunner;
use crate::common::fixtures::Workspace;

#[test]
fn robot_report_lists_files_and_variants() {
    let workspace = Workspace::new();
    let result = CliRunner::new()
        .with_working_dir(workspace.path().to_path_buf())
        .run_robot(&[]);
    result.assert_success();

    let report = result.json();
    assert_json_has_fields(&report, &["ok", "dry_run", "files"]);
    assert_eq!(report["ok"], true);
    assert_eq!(report["dry_run"], false);

    let files = report["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert!(files[0]["path"].as_str().unwrap().ends_with("everforest-dark.json"));
    assert_eq!(files[0]["name"], "Everforest Dark");
    assert_eq!(files[0]["appearance"], "dark");
    assert_eq!(
        files[1]["variants"],
        serde_json::json!([
            "Everforest Light Hard",
            "Everforest Light Medium",
            "Everforest Light Soft"
        ])
    );
}

#[test]
fn compact_format_is_one_line() {
    let workspace = Workspace::new();
    let result = CliRunner::new()
        .with_working_dir(workspace.path().to_path_buf())
        .run(&["--format", "json-compact", "--dry-run"]);
    result.assert_success();

    assert_eq!(result.stdout.trim().lines().count(), 1);
    assert_eq!(result.json()["dry_run"], true);
}
