//! Integration tests for the fabgen binary.
//!
//! The generation tests drive the real pipeline against shell-builtin
//! toolchain commands configured through `fabgen.toml`, so no npm is
//! required.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn fabgen() -> Command {
    Command::cargo_bin("fabgen").unwrap()
}

/// Workspace with a config that replaces npm with shell builtins.
fn workspace(build_command: &str, scaffold_command: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("fabgen.toml"),
        format!(
            "[toolchain]\n\
             scaffold_command = \"{scaffold_command}\"\n\
             install_command = \"true\"\n\
             build_command = \"{build_command}\"\n\
             build_timeout_secs = 30\n"
        ),
    )
    .unwrap();
    fs::create_dir(dir.path().join("artifacts")).unwrap();
    dir
}

// ── argument handling ────────────────────────────────────────────────────────

#[test]
fn no_arguments_shows_help_and_exits_2() {
    fabgen()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_flag_exits_2() {
    fabgen().arg("--definitely-not-a-flag").assert().code(2);
}

#[test]
fn version_flag_prints_version() {
    fabgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── plan ─────────────────────────────────────────────────────────────────────

#[test]
fn plan_table_lists_ten_steps() {
    fabgen()
        .args(["plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Implementation plan"))
        .stdout(predicate::str::contains("Setup React application structure"))
        .stdout(predicate::str::contains("Add real-time data updates"));
}

#[test]
fn plan_json_is_valid_and_ordered() {
    let output = fabgen().args(["plan", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let steps = plan.as_array().unwrap();
    assert_eq!(steps.len(), 10);
    for (i, step) in steps.iter().enumerate() {
        assert_eq!(step["sequence"], (i + 1) as u64);
    }
}

// ── components ───────────────────────────────────────────────────────────────

#[test]
fn components_list_names_all_seven() {
    let output = fabgen()
        .args(["components", "--format", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(names.len(), 7);
    assert!(names.contains(&"MqttProvider"));
    assert!(names.contains(&"MessageFeed"));
}

// ── extract ──────────────────────────────────────────────────────────────────

#[test]
fn extract_from_empty_directory_reports_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fabgen()
        .args(["extract", "--spec-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults"));
}

#[test]
fn extract_json_deduplicates_equipment() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("PRD.md"), "data via ws://broker/mqtt").unwrap();
    fs::write(
        dir.path().join("dashboard_spec.md"),
        "LASER01, BEND02, LASER01, COAT03",
    )
    .unwrap();

    let output = fabgen()
        .args(["extract", "--format", "json", "--spec-dir"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["equipment"].as_array().unwrap().len(), 3);
    assert_eq!(record["components"].as_array().unwrap().len(), 7);
    assert_eq!(record["connection"]["host"], "broker.hivemq.com");
}

// ── generate ─────────────────────────────────────────────────────────────────

#[test]
fn dry_run_lists_artifacts_without_writing() {
    let dir = workspace("true", "mkdir -p new-app");

    fabgen()
        .current_dir(dir.path())
        .args(["generate", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/App.tsx"))
        .stdout(predicate::str::contains("src/components/ui/card.tsx"));

    assert!(!dir.path().join("new-app").exists());
}

#[test]
fn generate_with_passing_build_exits_zero() {
    let dir = workspace("true", "mkdir -p new-app");

    fabgen()
        .current_dir(dir.path())
        .args(["generate", "--yes", "--skip-install"])
        .assert()
        .success();

    let root = dir.path().join("new-app");
    assert!(root.join("src/App.tsx").is_file());
    assert!(root.join("src/components/MqttProvider.tsx").is_file());
    assert!(root.join("src/components/ui/table.tsx").is_file());
    let app = fs::read_to_string(root.join("src/App.tsx")).unwrap();
    assert!(app.contains("MqttProvider"));
}

#[test]
fn generate_with_failing_build_exits_5_and_keeps_tree() {
    let dir = workspace("echo compile error >&2; exit 1", "mkdir -p new-app");

    fabgen()
        .current_dir(dir.path())
        .args(["generate", "--yes", "--skip-install"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("validation failed"));

    // Generated tree is left in place for inspection.
    assert!(dir.path().join("new-app/src/App.tsx").is_file());
}

#[test]
fn generate_with_failing_scaffold_exits_1_and_writes_nothing() {
    let dir = workspace("true", "exit 1");

    fabgen()
        .current_dir(dir.path())
        .args(["generate", "--yes", "--skip-install"])
        .assert()
        .code(1);

    assert!(!dir.path().join("new-app").exists());
}

#[test]
fn generate_skip_validate_succeeds_without_build() {
    // A build command that would fail loudly if invoked.
    let dir = workspace("exit 99", "mkdir -p new-app");

    fabgen()
        .current_dir(dir.path())
        .args(["generate", "--yes", "--skip-install", "--skip-validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("validation skipped"));
}

#[test]
fn generate_twice_overwrites_cleanly() {
    let dir = workspace("true", "mkdir -p new-app");

    for _ in 0..2 {
        fabgen()
            .current_dir(dir.path())
            .args(["generate", "--yes", "--skip-install"])
            .assert()
            .success();
    }

    assert!(dir.path().join("new-app/src/App.tsx").is_file());
}

#[test]
fn log_file_captures_run_events() {
    let dir = workspace("true", "mkdir -p new-app");
    let log = dir.path().join("workflow.log");

    fabgen()
        .current_dir(dir.path())
        .args(["-v", "--log-file"])
        .arg(&log)
        .args(["generate", "--yes", "--skip-install"])
        .assert()
        .success();

    let text = fs::read_to_string(&log).unwrap();
    assert!(text.contains("Requirements analysis complete"));
}

#[test]
fn explicit_missing_config_exits_4() {
    fabgen()
        .args(["--config", "/no/such/fabgen.toml", "plan"])
        .assert()
        .code(4);
}

// ── spec-dir flag interplay ──────────────────────────────────────────────────

#[test]
fn generate_uses_spec_dir_flag_over_config() {
    let dir = workspace("true", "mkdir -p new-app");
    let specs = dir.path().join("other-specs");
    fs::create_dir(&specs).unwrap();
    fs::write(specs.join("dashboard_spec.md"), "CH01 HT02").unwrap();

    fabgen()
        .current_dir(dir.path())
        .args(["generate", "--yes", "--skip-install", "--spec-dir"])
        .arg(&specs)
        .assert()
        .success()
        .stdout(predicate::str::contains("Equipment:  2"));
}
