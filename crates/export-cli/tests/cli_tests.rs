//! Black-box tests against the built binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("model-export").unwrap()
}

fn write_fixtures(dir: &TempDir) {
    fs::write(
        dir.path().join("config.toml"),
        r#"
            [auth]
            username = "dev@example.com"
            api_key = "secret"

            [project]
            id = "abc-123"
            name = "MyApp"
            branch = "trunk"

            [export]
            output_dir = "./out"
        "#,
    )
    .unwrap();

    fs::write(
        dir.path().join("model.json"),
        r#"{
            "project": "MyApp",
            "constants": [
                {"qualified_name": "Core.MaxRetries", "source": "3"}
            ],
            "pages": [
                {"qualified_name": "Core.Home", "source": "<page/>"}
            ]
        }"#,
    )
    .unwrap();
}

#[test]
fn no_args_prints_help_hint() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("model-export --help"));
}

#[test]
fn kinds_lists_all_six_in_order() {
    cmd()
        .arg("kinds")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. CONSTANT"))
        .stdout(predicate::str::contains("2. DOMAIN MODEL"))
        .stdout(predicate::str::contains("6. SNIPPET"));
}

#[test]
fn export_writes_element_files() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);

    cmd()
        .current_dir(dir.path())
        .args(["export", "--snapshot", "model.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 files written"));

    assert!(dir.path().join("out/MyApp/Core.MaxRetries [CONSTANT]").is_file());
    assert!(dir.path().join("out/MyApp/Core.Home [PAGE]").is_file());
}

#[test]
fn export_second_run_skips_and_still_succeeds() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);

    cmd()
        .current_dir(dir.path())
        .args(["export", "--snapshot", "model.json"])
        .assert()
        .success();

    cmd()
        .current_dir(dir.path())
        .args(["export", "--snapshot", "model.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn export_json_summary() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);

    cmd()
        .current_dir(dir.path())
        .args(["export", "--snapshot", "model.json", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"skipped\": false"))
        .stdout(predicate::str::contains("\"project\": \"MyApp\""));
}

#[test]
fn export_missing_snapshot_reports_error() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);

    cmd()
        .current_dir(dir.path())
        .args(["export", "--snapshot", "absent.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn config_show_redacts_api_key() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);

    cmd()
        .current_dir(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<redacted>"))
        .stdout(predicate::str::contains("secret").not());
}
