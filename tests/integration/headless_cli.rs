//! Binary-level tests for the headless CLI mode.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sortscope(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sortscope").expect("binary builds");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn headless_run_prints_a_passing_report() {
    let dir = TempDir::new().unwrap();
    sortscope(&dir)
        .args([
            "--headless",
            "--algorithm",
            "quick",
            "--size",
            "32",
            "--seed",
            "7",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick Sort"))
        .stdout(predicate::str::contains("OVERALL: PASS"));
}

#[test]
fn seeded_runs_are_reproducible() {
    let dir = TempDir::new().unwrap();
    let args = [
        "--headless",
        "--algorithm",
        "shaker",
        "--shape",
        "nearly-sorted",
        "--size",
        "24",
        "--seed",
        "42",
    ];

    let first = sortscope(&dir).args(args).assert().success();
    let second = sortscope(&dir).args(args).assert().success();
    assert_eq!(
        first.get_output().stdout,
        second.get_output().stdout,
        "same seed must print the same run"
    );
}

#[test]
fn empty_dataset_is_a_valid_run() {
    let dir = TempDir::new().unwrap();
    sortscope(&dir)
        .args(["--headless", "--size", "0", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OVERALL: PASS"));
}

#[test]
fn unknown_algorithm_fails_fast() {
    let dir = TempDir::new().unwrap();
    sortscope(&dir)
        .args(["--headless", "--algorithm", "bogo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown sort algorithm"));
}

#[test]
fn inverted_range_fails_fast() {
    let dir = TempDir::new().unwrap();
    sortscope(&dir)
        .args(["--headless", "--min", "10", "--max", "1", "--seed", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dataset generation failed"));
}
