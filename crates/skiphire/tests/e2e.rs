//! End-to-end CLI integration tests.

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn skiphire() -> Command {
    Command::cargo_bin("skiphire").expect("binary not found")
}

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/testdata/catalog.json")
}

fn list() -> Command {
    let mut cmd = skiphire();
    cmd.arg("--list").arg("--catalog-file").arg(fixture());
    cmd
}

#[test]
fn help_flag() {
    skiphire()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--waste"))
        .stdout(predicate::str::contains("--catalog-file"));
}

#[test]
fn version_flag() {
    skiphire()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("skiphire"));
}

#[test]
fn list_without_waste_shows_every_size() {
    list()
        .assert()
        .success()
        .stdout(predicate::str::contains("Heavy waste: none"))
        .stdout(predicate::str::contains("4y"))
        .stdout(predicate::str::contains("40y"))
        .stdout(predicate::str::contains("£333.60"));
}

#[test]
fn list_with_heavy_waste_drops_unsuitable_skips() {
    list()
        .args(["--waste", "soil,concrete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Heavy waste: Soil, Concrete"))
        .stdout(predicate::str::contains("10y"))
        .stdout(predicate::str::contains("12y").not())
        .stdout(predicate::str::contains("40y").not());
}

#[test]
fn list_json_is_sorted_by_size() {
    let output = list()
        .args(["--json", "--waste", "bricks"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let skips: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let sizes: Vec<f64> = skips
        .iter()
        .map(|s| s["size"].as_f64().unwrap())
        .collect();
    assert_eq!(sizes, [4.0, 6.0, 8.0, 10.0]);
    assert!(skips.iter().all(|s| s["allows_heavy_waste"] == true));
}

#[test]
fn unknown_waste_type_rejected() {
    list()
        .args(["--waste", "asbestos"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("asbestos"));
}

#[test]
fn json_requires_list() {
    skiphire().arg("--json").assert().failure();
}

#[test]
fn missing_catalog_file_exits_with_config_code() {
    skiphire()
        .args(["--list", "--catalog-file", "/nonexistent/skips.json"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains(
            "Failed to load skip options. Please try again later.",
        ));
}

#[test]
fn malformed_catalog_exits_with_fetch_code() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{{\"not\": \"a list\"}}").unwrap();
    skiphire()
        .arg("--list")
        .arg("--catalog-file")
        .arg(file.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to load skip options"));
}

#[test]
fn completion_bash() {
    skiphire()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skiphire"));
}

#[test]
fn malformed_timeout_is_rejected() {
    list()
        .args(["--timeout", "ten seconds"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duration"));
}

#[test]
fn oversized_timeout_is_rejected_without_panic() {
    list()
        .args(["--timeout", "307445734561825861m"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("duration too large"));
}
