// End-to-end tests for the scorecard CLI.
//
// Scores are piped through stdin; every run is isolated in a temp dir that
// doubles as HOME so no user config leaks in.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn scorecard(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scorecard").expect("binary should exist");
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("SCORECARD_LOG");
    cmd
}

fn answers(name: &str, score: &str) -> String {
    format!("{name}\n{}", format!("{score}\n").repeat(11))
}

#[test]
fn cli_help_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    scorecard(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("startup team scorecard"));
}

#[test]
fn criteria_lists_rubric_in_order() {
    let dir = TempDir::new().expect("temp dir should be created");
    scorecard(&dir)
        .arg("criteria")
        .assert()
        .success()
        .stdout(predicate::str::contains("Founder Traits (Weight: 30%)"))
        .stdout(predicate::str::contains("Investor Fit (Weight: 15%)"))
        .stdout(predicate::str::contains("11 criteria across 4 categories"));
}

#[test]
fn evaluate_all_eights_writes_report_and_charts() {
    let dir = TempDir::new().expect("temp dir should be created");
    scorecard(&dir)
        .arg("evaluate")
        .write_stdin(answers("Acme", "8"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Final Score: 80.00/100"))
        .stdout(predicate::str::contains("Strong Team"))
        .stdout(predicate::str::contains("PDF report generated"));

    let pdf = fs::read(dir.path().join("Acme_Scorecard.pdf")).expect("pdf should exist");
    assert!(pdf.starts_with(b"%PDF"));
    assert!(dir.path().join("Acme_radar_chart.svg").exists());
    assert!(dir.path().join("Acme_bar_1_1.svg").exists());
    assert!(dir.path().join("Acme_bar_4_1.svg").exists());

    let bars = fs::read_dir(dir.path())
        .expect("dir should list")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().contains("_bar_"))
        .count();
    assert_eq!(bars, 11);
}

#[test]
fn evaluate_reprompts_on_invalid_scores() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = format!("Acme\nabc\n11\n0\n-5\n{}", "10\n".repeat(11));
    scorecard(&dir)
        .arg("evaluate")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Please enter a number."))
        .stdout(predicate::str::contains(
            "Invalid score. Please enter a number between 1 and 10.",
        ))
        .stdout(predicate::str::contains("Final Score: 100.00/100"))
        .stdout(predicate::str::contains("Outstanding Team"));
}

#[test]
fn evaluate_fails_when_input_ends_early() {
    let dir = TempDir::new().expect("temp dir should be created");
    scorecard(&dir)
        .arg("evaluate")
        .write_stdin("Acme\n8\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input closed"));
    assert!(!dir.path().join("Acme_Scorecard.pdf").exists());
}

#[test]
fn evaluate_honours_output_dir_and_json_summary() {
    let dir = TempDir::new().expect("temp dir should be created");
    scorecard(&dir)
        .args(["evaluate", "--output-dir", "out", "--summary", "json"])
        .write_stdin(answers("R&D Labs", "3"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tier\": \"high_risk\""))
        .stdout(predicate::str::contains("\"startup\": \"R&D Labs\""));

    assert!(dir.path().join("out").join("R_D Labs_Scorecard.pdf").exists());
}

#[test]
fn evaluate_reads_local_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("scorecard.toml"),
        r#"
[output]
dir = "reports"
report_suffix = "Review"
summary = "md"
"#,
    )
    .expect("config should write");

    scorecard(&dir)
        .arg("evaluate")
        .write_stdin(answers("Acme", "5"))
        .assert()
        .success()
        .stdout(predicate::str::contains("## Category Scores"));

    assert!(dir.path().join("reports").join("Acme_Review.pdf").exists());
}

#[test]
fn evaluate_rejects_invalid_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("scorecard.toml"),
        r#"
[output]
report_suffix = "a/b"
"#,
    )
    .expect("config should write");

    scorecard(&dir)
        .arg("evaluate")
        .write_stdin(answers("Acme", "5"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config parse error"));
}
