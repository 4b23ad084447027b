use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn setup_maven_project() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("pom.xml"), "<project/>").unwrap();
    fs::create_dir_all(dir.path().join("target/classes")).unwrap();
    fs::write(dir.path().join("target/classes/App.class"), "bytecode").unwrap();
    dir
}

#[test]
fn dry_run_reports_without_deleting() {
    let dir = setup_maven_project();

    let mut cmd = Command::cargo_bin("clearout").unwrap();
    cmd.arg(dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stderr(predicate::str::contains("can be deleted"))
        .stderr(predicate::str::contains("target"))
        .stdout(predicate::str::contains("could be deleted"));

    assert!(dir.path().join("target/classes/App.class").exists());
}

#[test]
fn real_run_deletes_maven_target() {
    let dir = setup_maven_project();

    let mut cmd = Command::cargo_bin("clearout").unwrap();
    cmd.arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Deleting"));

    assert!(!dir.path().join("target").exists());
    assert!(dir.path().join("pom.xml").exists());
}

#[test]
fn summary_counts_each_path_once() {
    // The Maven entry-point case and the Maven definition both request the
    // same target directory; the summary must not double-count it.
    let dir = setup_maven_project();

    let mut cmd = Command::cargo_bin("clearout").unwrap();
    cmd.arg(dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 path(s) could be deleted"));
}

#[test]
fn recursive_flag_cleans_subprojects() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("module");
    fs::create_dir_all(sub.join("target")).unwrap();
    fs::write(sub.join("pom.xml"), "<project/>").unwrap();
    fs::write(sub.join("target/out.jar"), "jar").unwrap();

    let mut cmd = Command::cargo_bin("clearout").unwrap();
    cmd.arg(dir.path()).arg("--recursive").assert().success();

    assert!(!sub.join("target").exists());
}

#[test]
fn clean_tree_reports_nothing_to_clean() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("README.md"), "# readme").unwrap();

    let mut cmd = Command::cargo_bin("clearout").unwrap();
    cmd.arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to clean"));
}

#[test]
fn missing_path_warns_and_succeeds() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("no-such-dir");

    let mut cmd = Command::cargo_bin("clearout").unwrap();
    cmd.arg(&missing)
        .assert()
        .success()
        .stderr(predicate::str::contains("not a directory"));
}
