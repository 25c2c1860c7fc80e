//! End-to-end tests for the ato-runner binary, run with --dry-run so the
//! terminal lines are printed instead of executed

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TWO_BUILDS: &str = "builds:\n  a:\n    entry: x\n  b:\n    entry: y\n";

fn project(interpreter: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ato.yaml"), TWO_BUILDS).unwrap();
    if let Some(command) = interpreter {
        fs::create_dir_all(dir.path().join(".vscode")).unwrap();
        fs::write(
            dir.path().join(".vscode/settings.json"),
            serde_json::json!({ "atopile.interpreter": [command] }).to_string(),
        )
        .unwrap();
    }
    dir
}

fn ato_runner(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ato-runner").unwrap();
    cmd.env_remove("ATO_RUNNER_WORKSPACE")
        .arg("--dry-run")
        .arg("--cwd")
        .arg(root);
    cmd
}

#[test]
fn test_build_sends_activation_then_build() {
    let dir = project(Some("source env/bin/activate"));

    ato_runner(dir.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[ato Build] source env/bin/activate\n[ato Build] ato build --build a\n",
        ));
}

#[test]
fn test_build_prompts_for_interpreter() {
    let dir = project(None);

    ato_runner(dir.path())
        .arg("build")
        .write_stdin("  conda activate ato  \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ato Build] conda activate ato\n"))
        .stderr(predicate::str::contains(
            "Terminal command to activate the Python virtual environment",
        ));

    let settings = fs::read_to_string(dir.path().join(".vscode/settings.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&settings).unwrap();
    assert_eq!(json["atopile.interpreter"][0], "conda activate ato");
}

#[test]
fn test_cancelled_interpreter_prompt() {
    let dir = project(None);

    ato_runner(dir.path())
        .arg("create")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("ato create").not())
        .stderr(predicate::str::contains("Cancelled"));
}

#[test]
fn test_install_component_from_argument() {
    let dir = project(Some("source env/bin/activate"));

    ato_runner(dir.path())
        .args(["install", "C25744"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ato Install] ato install --jlcpcb C25744"));
}

#[test]
fn test_install_package_from_stdin() {
    let dir = project(Some("source env/bin/activate"));

    ato_runner(dir.path())
        .arg("install-package")
        .write_stdin("generics\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ato Install] ato install generics"));
}

#[test]
fn test_chosen_target_is_used_by_build() {
    let dir = project(Some("source env/bin/activate"));

    ato_runner(dir.path())
        .arg("choose-target")
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Build target: b-y"));

    ato_runner(dir.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ato Build] ato build --build b"));

    ato_runner(dir.path())
        .arg("targets")
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. a-x\n* 2. b-y"));
}

#[test]
fn test_unknown_target_is_ignored() {
    let dir = project(None);

    ato_runner(dir.path())
        .args(["choose-target", "c-z"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Cancelled"));

    assert!(!dir.path().join(".ato-runner.json").exists());
}

#[test]
fn test_targets_without_descriptor() {
    let dir = TempDir::new().unwrap();

    ato_runner(dir.path())
        .arg("targets")
        .assert()
        .success()
        .stdout(predicate::str::contains("No ato.yaml"));
}

#[test]
fn test_status_lists_commands() {
    let dir = project(Some("source env/bin/activate"));

    ato_runner(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interpreter: source env/bin/activate"))
        .stdout(predicate::str::contains("atopile.build"))
        .stdout(predicate::str::contains("a-x"));
}

#[test]
fn test_set_interpreter_from_argument() {
    let dir = project(None);

    ato_runner(dir.path())
        .args(["set-interpreter", " source env/bin/activate "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Interpreter: source env/bin/activate"));
}
