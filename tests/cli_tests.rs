//! Command-line Test Suite
//!
//! Runs the `mapq-summary` binary end to end and checks the files it writes,
//! its exit status, and the reports it prints.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SCENARIO: &str = "@HD\tv1\n\
                        @HD\tv1\n\
                        @SQ\tr1\n\
                        A\t0\tr1\t1\t30\t4M\t*\t0\t0\tACGT\tIIII\n\
                        B\t4\t*\t0\t0\t*\t*\t0\t0\tACGT\tIIII\n\
                        C\t16\tr1\t7\t30\t4M\t*\t0\t0\tACGT\tIIII\n\
                        D\t0\tr1\t9\t10\t4M\t*\t0\t0\tACGT\tIIII\n";

fn mapq_summary() -> Command {
    Command::cargo_bin("mapq-summary").expect("binary should be built")
}

fn write_input(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write input");
    path
}

/// Test the documented scenario: cleaned file and summary rows
#[test]
fn test_scenario_outputs() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "reads.sam", SCENARIO);
    let output = dir.path().join("summary.tsv");

    mapq_summary()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaned SAM saved to:"))
        .stdout(predicate::str::contains("MAPQ summary saved to:"));

    let cleaned = std::fs::read_to_string(dir.path().join("aligned_output_unique.sam")).unwrap();
    let lines: Vec<&str> = cleaned.lines().collect();
    assert_eq!(lines[0], "@HD\tv1");
    assert_eq!(lines[1], "@SQ\tr1");
    assert_eq!(lines.len(), 6);
    assert!(lines[2].starts_with("A\t"));
    assert!(lines[5].starts_with("D\t"));

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "MAPQ\tCumulative_Count\n10\t3\n30\t2\n"
    );
}

/// Test that an empty input yields a header-only summary
#[test]
fn test_empty_input() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "empty.sam", "");
    let output = dir.path().join("summary.tsv");

    mapq_summary().arg(&input).arg(&output).assert().success();

    assert_eq!(
        std::fs::read_to_string(dir.path().join("aligned_output_unique.sam")).unwrap(),
        ""
    );
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "MAPQ\tCumulative_Count\n"
    );
}

/// Test that a file of only unmapped records yields a header-only summary
#[test]
fn test_all_unmapped() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "unmapped.sam",
        "@HD\tVN:1.6\nr1\t4\t*\t0\t0\t*\t*\t0\t0\tA\tI\nr2\t4\t*\t0\t255\t*\t*\t0\t0\tA\tI\n",
    );
    let output = dir.path().join("summary.tsv");

    mapq_summary().arg(&input).arg(&output).assert().success();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "MAPQ\tCumulative_Count\n"
    );
}

/// Test that a missing input fails before anything is written
#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("summary.tsv");

    mapq_summary()
        .arg(dir.path().join("missing.sam"))
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    assert!(!output.exists());
    assert!(!dir.path().join("aligned_output_unique.sam").exists());
}

/// Test that a directory is rejected as input
#[test]
fn test_directory_input_fails() {
    let dir = TempDir::new().unwrap();

    mapq_summary()
        .arg(dir.path())
        .arg(dir.path().join("summary.tsv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a regular file"));
}

/// Test that the command requires both positional arguments
#[test]
fn test_usage_error() {
    mapq_summary()
        .arg("only-one.sam")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

/// Test the --cleaned override
#[test]
fn test_custom_cleaned_path() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "reads.sam", SCENARIO);
    let output = dir.path().join("summary.tsv");
    let cleaned = dir.path().join("custom.sam");

    mapq_summary()
        .arg(&input)
        .arg(&output)
        .arg("--cleaned")
        .arg(&cleaned)
        .assert()
        .success();

    assert!(cleaned.is_file());
    assert!(!dir.path().join("aligned_output_unique.sam").exists());
}

/// Test the JSON report
#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "reads.sam", SCENARIO);
    let output = dir.path().join("summary.tsv");

    let assert = mapq_summary()
        .arg(&input)
        .arg(&output)
        .args(["--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("stdout should be JSON");

    assert_eq!(report["dedup"]["duplicate_headers"], 1);
    assert_eq!(report["dedup"]["unique_headers"], 2);
    assert_eq!(report["aggregate"]["mapped"], 3);
    assert_eq!(report["aggregate"]["unmapped"], 1);
    assert_eq!(
        report["cumulative"],
        serde_json::json!([
            { "mapq": 10, "cumulative_count": 3 },
            { "mapq": 30, "cumulative_count": 2 },
        ])
    );
}

/// Test the TSV report matches the summary file
#[test]
fn test_tsv_report() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "reads.sam", SCENARIO);
    let output = dir.path().join("summary.tsv");

    mapq_summary()
        .arg(&input)
        .arg(&output)
        .args(["-f", "tsv"])
        .assert()
        .success()
        .stdout("MAPQ\tCumulative_Count\n10\t3\n30\t2\n");
}

/// Test that malformed records are skipped without failing the run
#[test]
fn test_malformed_records_skipped() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "messy.sam",
        "@HD\tVN:1.6\nr1\t0\tchr1\t1\t60\nbroken line\nr2\tx\tchr1\t1\t60\nr3\t0\tchr1\t1\t5\n",
    );
    let output = dir.path().join("summary.tsv");

    mapq_summary()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 malformed"));

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "MAPQ\tCumulative_Count\n5\t2\n60\t1\n"
    );
}

/// Test that MAPQ values beyond 32 bits are counted, and padded ones are not
#[test]
fn test_wide_and_padded_mapq() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "wide.sam",
        "r1\t0\tc\t1\t4294967296\nr2\t0\tc\t1\t3\nr3\t0\tc\t1\t 7 \n",
    );
    let output = dir.path().join("summary.tsv");

    mapq_summary()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 mapped, 0 unmapped, 1 malformed"));

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "MAPQ\tCumulative_Count\n3\t2\n4294967296\t1\n"
    );
}

/// Test that verbose runs log skipped records to stderr
#[test]
fn test_verbose_logs_skipped_records() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "messy.sam", "r1\t0\tchr1\t1\t60\nbroken line\n");
    let output = dir.path().join("summary.tsv");

    mapq_summary()
        .arg(&input)
        .arg(&output)
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping malformed alignment record"));

    mapq_summary()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping malformed alignment record").not());
}
