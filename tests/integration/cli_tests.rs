//! Runs of the riscof-prerun binary against temporary working directories

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const TEMPLATE: &str = "[RISCOF]\nDUTPluginPath = /a/b\nReferencePluginPath = /c/d\n\n[riscv_emulator]\n\n[sail_cSim]\n";

fn setup(work_dir: &Path, content: &str) {
    let test_dir = work_dir.join("riscof-test");
    fs::create_dir_all(&test_dir).unwrap();
    fs::write(test_dir.join("template.ini"), content).unwrap();
}

#[test]
fn test_runs_in_current_directory() {
    let dir = tempdir().unwrap();
    setup(dir.path(), TEMPLATE);

    let mut cmd = Command::cargo_bin("riscof-prerun").unwrap();
    cmd.current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("config.ini"));

    let output = fs::read_to_string(dir.path().join("riscof-test/config.ini")).unwrap();
    assert!(output.contains("DUTPluginPath = /a/b"));
    assert!(output.contains("ReferencePluginPath = /c/d"));
    assert!(output.contains("riscof-test-path = "));
}

#[test]
fn test_dir_flag() {
    let dir = tempdir().unwrap();
    setup(dir.path(), TEMPLATE);

    let mut cmd = Command::cargo_bin("riscof-prerun").unwrap();
    cmd.args(["--dir", dir.path().to_str().unwrap(), "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(dir.path().join("riscof-test/config.ini").exists());
}

#[test]
fn test_dry_run_prints_config() {
    let dir = tempdir().unwrap();
    setup(dir.path(), TEMPLATE);

    let mut cmd = Command::cargo_bin("riscof-prerun").unwrap();
    cmd.args(["-C", dir.path().to_str().unwrap(), "--dry-run", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[RISCOF]\n"))
        .stdout(predicate::str::contains("[sail_cSim]\nReferencePluginPath = /c/d\n"));

    assert!(!dir.path().join("riscof-test/config.ini").exists());
}

#[test]
fn test_missing_template_exits_nonzero() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("riscof-prerun").unwrap();
    cmd.current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_missing_prerequisite_exits_nonzero() {
    let dir = tempdir().unwrap();
    setup(dir.path(), "[RISCOF]\nReferencePluginPath = /c/d\n[riscv_emulator]\n[sail_cSim]\n");

    let mut cmd = Command::cargo_bin("riscof-prerun").unwrap();
    cmd.current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("DUTPluginPath"));
}

#[test]
fn test_rules_file() {
    let dir = tempdir().unwrap();
    setup(dir.path(), "[RISCOF]\n[riscv_emulator]\n");
    let rules = dir.path().join("rules.toml");
    fs::write(
        &rules,
        "[[rule]]\nsection = \"riscv_emulator\"\nkey = \"jobs\"\nsource = { kind = \"literal\", value = \"8\" }\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("riscof-prerun").unwrap();
    cmd.current_dir(dir.path())
        .args(["--rules", rules.to_str().unwrap()])
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("riscof-test/config.ini")).unwrap();
    assert_eq!(output, "[RISCOF]\n\n[riscv_emulator]\njobs = 8\n\n");
}
