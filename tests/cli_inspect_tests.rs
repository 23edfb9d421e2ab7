//! End-to-end tests for `gridcraft inspect` and `gridcraft reset`.

use std::process::Command;

mod fixtures;
use fixtures::*;

#[test]
fn test_inspect_summarizes_saved_document() {
    let state = test_state_colored();
    let (state_path, _temp) = write_state_file(&state);

    let output = Command::new(gridcraft_bin())
        .args(["inspect", "--state", state_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Grid: 5 columns, gap 16px, radius 8px"));
    assert!(stdout.contains("Selected color: #EF4444 (Red)"));
    assert!(stdout.contains("#3B82F6 (Blue)"));
    assert!(stdout.contains("2×1"));
}

#[test]
fn test_inspect_json_roundtrips_the_record() {
    let state = test_state_colored();
    let (state_path, _temp) = write_state_file(&state);

    let output = Command::new(gridcraft_bin())
        .args(["inspect", "--state", state_path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let record: serde_json::Value = serde_json::from_slice(&output.stdout)
        .expect("inspect --json should emit valid JSON");
    assert_eq!(record["gridConfig"]["columns"], 5);
    assert_eq!(record["gridConfig"]["items"][0]["i"], "1");
    assert_eq!(record["selectedColor"], "#EF4444");
}

#[test]
fn test_inspect_missing_state_shows_default_document() {
    let (state_path, _temp) = missing_state_file();

    let output = Command::new(gridcraft_bin())
        .args(["inspect", "--state", state_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Grid: 4 columns, gap 10px, radius 8px"));
    assert!(stdout.contains("#333333 (Gray)"));
}

#[test]
fn test_reset_restores_default_document() {
    let state = test_state_colored();
    let (state_path, _temp) = write_state_file(&state);

    let output = Command::new(gridcraft_bin())
        .args(["reset", "--state", state_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Restored the default grid document"));

    let inspect = Command::new(gridcraft_bin())
        .args(["inspect", "--state", state_path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    let record: serde_json::Value = serde_json::from_slice(&inspect.stdout).unwrap();
    assert_eq!(record["gridConfig"]["columns"], 4);
    assert_eq!(record["gridConfig"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(record["selectedColor"], "#333333");
}

#[test]
fn test_copy_completes_without_a_clipboard() {
    let state = test_state_colored();
    let (state_path, _temp) = write_state_file(&state);

    let output = Command::new(gridcraft_bin())
        .args(["copy", "--state", state_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    // Clipboard failure is a diagnostic, never an error exit.
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_copy_rejects_unknown_format() {
    let (state_path, _temp) = missing_state_file();

    let output = Command::new(gridcraft_bin())
        .args([
            "copy",
            "--state",
            state_path.to_str().unwrap(),
            "--format",
            "pdf",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
