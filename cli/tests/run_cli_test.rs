use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn psum() -> Command {
    Command::cargo_bin("psum").expect("psum binary")
}

#[test]
fn test_run_all_strategies_prints_each() {
    psum()
        .args(["run", "--size", "1000", "--workers", "4", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sequential"))
        .stdout(predicate::str::contains("partitioned"))
        .stdout(predicate::str::contains("parallel-query"))
        .stdout(predicate::str::contains("fastest for 1000 elements"));
}

#[test]
fn test_run_single_strategy() {
    psum()
        .args(["run", "--strategy", "partitioned", "--size", "7", "--workers", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("partitioned"))
        .stdout(predicate::str::contains("sequential").not())
        .stdout(predicate::str::contains("fastest").not());
}

#[test]
fn test_seeded_runs_print_identical_totals() {
    let totals = || {
        let output = psum()
            .args(["run", "--strategy", "sequential", "--size", "5000", "--seed", "42"])
            .output()
            .expect("spawn psum");
        assert!(output.status.success());
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter_map(|line| line.split("sum = ").nth(1).map(str::to_string))
            .collect::<Vec<_>>()
    };
    let first = totals();
    assert_eq!(first.len(), 1);
    assert_eq!(first, totals());
}

#[test]
fn test_zero_workers_fails() {
    psum()
        .args(["run", "--size", "10", "--workers", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("worker count must be at least 1"));
}

#[test]
fn test_zero_size_fails() {
    psum()
        .args(["run", "--size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("element count must be at least 1"));
}

#[test]
fn test_json_report_written() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("report.json");
    psum()
        .args(["run", "--size", "100", "--size", "200", "--seed", "3", "--accumulator", "atomic", "--json"])
        .arg(&path)
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read report")).expect("valid json");
    let comparisons = report["comparisons"].as_array().expect("comparisons array");
    assert_eq!(comparisons.len(), 2);
    assert_eq!(comparisons[1]["elements"], 200);
    assert_eq!(comparisons[0]["runs"].as_array().expect("runs").len(), 3);
    assert_eq!(report["config"]["accumulator"], "atomic");
}

#[test]
fn test_config_file_with_flag_override() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("psum.toml");
    fs::write(&path, "sizes = [50]\nworkers = 2\nseed = 8\n").expect("write config");

    psum()
        .arg("config")
        .arg("--config")
        .arg(&path)
        .args(["--workers", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sizes = [50]"))
        .stdout(predicate::str::contains("workers = 6"))
        .stdout(predicate::str::contains("seed = 8"));
}

#[test]
fn test_bad_config_file_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("psum.toml");
    fs::write(&path, "workers = \"many\"\n").expect("write config");

    psum()
        .arg("run")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("psum.toml"));
}
