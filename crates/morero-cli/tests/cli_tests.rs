use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory and draft path
fn create_cli_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let draft_path = temp_dir.path().join("draft.json");
    (temp_dir, draft_path)
}

/// Helper function to create a Command with plain output, a private draft
/// file and no processing delay
fn morero_cmd(draft_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("morero").expect("Failed to find morero binary");
    cmd.arg("--no-color")
        .arg("--draft-file")
        .arg(draft_path)
        .arg("--delay-ms")
        .arg("0");
    cmd
}

/// Run a command that must succeed and return its stdout
fn run_ok(draft_path: &Path, args: &[&str]) -> String {
    let output = morero_cmd(draft_path)
        .args(args)
        .output()
        .expect("Failed to run morero");
    assert!(output.status.success(), "command {args:?} failed");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[test]
fn test_cli_show_sample_draft() {
    let (_temp_dir, draft_path) = create_cli_test_environment();

    morero_cmd(&draft_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("- Project: Bridge Construction"))
        .stdout(predicate::str::contains("### Stage 1: Planning"))
        .stdout(predicate::str::contains("- Duration: 3 months"));
}

#[test]
fn test_cli_rename_project() {
    let (_temp_dir, draft_path) = create_cli_test_environment();

    morero_cmd(&draft_path)
        .args(["project", "rename", "Harbour Wall"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success: Project renamed to 'Harbour Wall'",
        ));

    morero_cmd(&draft_path)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Project: Harbour Wall"));
}

#[test]
fn test_cli_stage_add_and_update() {
    let (_temp_dir, draft_path) = create_cli_test_environment();

    morero_cmd(&draft_path)
        .args(["stage", "add"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added stage with ID: 2"))
        .stdout(predicate::str::contains("### Stage 2: (not set)"));

    morero_cmd(&draft_path)
        .args([
            "stage",
            "update",
            "2",
            "--name",
            "foundation",
            "--duration",
            "6",
            "--unit",
            "weeks",
            "--start-date",
            "2025-03-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated stage with ID: 2"))
        .stdout(predicate::str::contains("- Set name to 'Foundation'"))
        .stdout(predicate::str::contains("- Planned end: 2025-04-12"));
}

#[test]
fn test_cli_fractional_duration() {
    let (_temp_dir, draft_path) = create_cli_test_environment();

    morero_cmd(&draft_path)
        .args(["stage", "update", "1", "--duration", "2.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Set duration to 2.5"))
        .stdout(predicate::str::contains("- Duration: 2.5 months"))
        .stdout(predicate::str::contains("- Planned end: 2025-03-17"));

    let report = run_ok(&draft_path, &["predict"]);
    assert!(report.contains("| Planning | 2.5 months |"));
}

#[test]
fn test_cli_toggle_risk() {
    let (_temp_dir, draft_path) = create_cli_test_environment();

    morero_cmd(&draft_path)
        .args(["stage", "toggle", "1", "Weather Risks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected risk 'Weather Risks'"))
        .stdout(predicate::str::contains("- Risks: Weather Risks"));

    morero_cmd(&draft_path)
        .args(["stage", "toggle", "1", "weather-risks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deselected risk 'Weather Risks'"))
        .stdout(predicate::str::contains("- Risks: none"));
}

#[test]
fn test_cli_remove_last_stage_is_refused() {
    let (_temp_dir, draft_path) = create_cli_test_environment();

    morero_cmd(&draft_path)
        .args(["stage", "remove", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: At least one stage is required",
        ));

    morero_cmd(&draft_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("### Stage 1: Planning"));
}

#[test]
fn test_cli_invalid_values_are_refused() {
    let (_temp_dir, draft_path) = create_cli_test_environment();

    morero_cmd(&draft_path)
        .args(["stage", "update", "1", "--duration", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid input for field 'duration'"));

    morero_cmd(&draft_path)
        .args(["stage", "toggle", "1", "Earthquakes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid risk factor: Earthquakes"));

    morero_cmd(&draft_path)
        .args(["stage", "update", "9", "--unit", "weeks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Stage with ID 9 not found"));
}

#[test]
fn test_cli_submit_notices() {
    let (_temp_dir, draft_path) = create_cli_test_environment();

    run_ok(&draft_path, &["project", "rename", ""]);
    morero_cmd(&draft_path)
        .arg("submit")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Please enter a project name"));

    run_ok(&draft_path, &["project", "rename", "Depot"]);
    run_ok(&draft_path, &["stage", "add"]);
    morero_cmd(&draft_path)
        .arg("submit")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Please complete all stage details: stage 2 is missing a name",
        ));
}

#[test]
fn test_cli_submit_then_open_results() {
    let (_temp_dir, draft_path) = create_cli_test_environment();

    run_ok(&draft_path, &["stage", "toggle", "1", "Regulatory Approvals"]);
    run_ok(&draft_path, &["stage", "toggle", "1", "Weather Risks"]);

    let submitted = run_ok(&draft_path, &["submit"]);
    let address = submitted
        .lines()
        .find(|line| line.starts_with("/results?"))
        .expect("No results address printed")
        .to_string();

    morero_cmd(&draft_path)
        .args(["results", &address])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Predictive Analysis Results"))
        .stdout(predicate::str::contains(
            "Risk assessment and recommendations for Bridge Construction",
        ))
        .stdout(predicate::str::contains(
            "| Planning | 3 months | 🟡 55% | Regulatory approvals, Weather risks |",
        ))
        .stdout(predicate::str::contains("## AI Recommendations"));
}

#[test]
fn test_cli_results_redirects_without_scenario() {
    let (_temp_dir, draft_path) = create_cli_test_environment();

    morero_cmd(&draft_path)
        .args(["results", "/results?projectName=UGllcg"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains("# Predictive Insights: Scenario Setup"))
        .stdout(predicate::str::contains("- Project: Bridge Construction"))
        .stdout(predicate::str::contains("Error").not());
}

#[test]
fn test_cli_predict() {
    let (_temp_dir, draft_path) = create_cli_test_environment();

    morero_cmd(&draft_path)
        .arg("predict")
        .assert()
        .success()
        .stderr(predicate::str::contains("Running Predictive Analysis..."))
        .stdout(predicate::str::contains(
            "| Planning | 3 months | 🟢 20% | Standard monitoring |",
        ))
        .stdout(predicate::str::contains("## Risk Overview Chart"));
}

#[test]
fn test_cli_reset() {
    let (_temp_dir, draft_path) = create_cli_test_environment();

    run_ok(&draft_path, &["stage", "add"]);
    morero_cmd(&draft_path)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Draft reset to the sample scenario"))
        .stdout(predicate::str::contains("- Stages: 1"));
}

#[test]
fn test_cli_catalog() {
    let (_temp_dir, draft_path) = create_cli_test_environment();

    morero_cmd(&draft_path)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Structural Work"))
        .stdout(predicate::str::contains("- Supplier Delays (+20%)"))
        .stdout(predicate::str::contains("- months"));
}

#[test]
fn test_cli_rejects_unknown_command() {
    let (_temp_dir, draft_path) = create_cli_test_environment();

    morero_cmd(&draft_path)
        .arg("launch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
