//! End-to-end tests for the `spoligotyper` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const BCG_BINARY: &str = "1101111101111110111111111111111111111100000";

fn write_database(dir: &Path) -> PathBuf {
    let path = dir.join("spoligotype_db.txt");
    let content = format!(
        "SB0145 SB0145 {}\nSB0120 SB0120 {BCG_BINARY}\n",
        "1".repeat(43)
    );
    std::fs::write(&path, content).unwrap();
    path
}

/// Stats file in BBTools format with the given count for every spacer whose
/// bit is set in `binary`, and no row for the others.
fn write_stats(dir: &Path, sample: &str, binary: &str, count: u64) -> PathBuf {
    let path = dir.join(format!("{sample}_stats.tsv"));
    let mut content = String::from("#File\treads.fastq.gz\n#Total\t822714\n#Name\tReads\tReadsPct\n");
    for (i, bit) in binary.chars().enumerate() {
        if bit == '1' {
            content.push_str(&format!("spacer{:02}\t{count}\t0.001%\n", i + 1));
        }
    }
    std::fs::write(&path, content).unwrap();
    path
}

fn cmd() -> Command {
    Command::cargo_bin("spoligotyper").unwrap()
}

#[test]
fn test_type_known_spoligotype() {
    let dir = TempDir::new().unwrap();
    let db = write_database(dir.path());
    let stats = write_stats(dir.path(), "S1", BCG_BINARY, 40);

    cmd()
        .arg("type")
        .arg(&stats)
        .arg("--database")
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("S1"))
        .stdout(predicate::str::contains("SB0120"))
        .stdout(predicate::str::contains("676773777777600"))
        .stdout(predicate::str::contains("6F-5F-5F-7F-FF-60"));
}

#[test]
fn test_type_tsv_and_report_file() {
    let dir = TempDir::new().unwrap();
    let db = write_database(dir.path());
    let stats = write_stats(dir.path(), "S2", &"1".repeat(43), 12);
    let out = dir.path().join("results");

    cmd()
        .args(["--format", "tsv", "type"])
        .arg(&stats)
        .arg("--database")
        .arg(&db)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Sample\tSpacerCount\tBinary\tOctal\tHexadecimal\tSpoligotype",
        ))
        .stdout(predicate::str::contains("777777777777771\t7F-7F-7F-7F-FF-7F\tSB0145"));

    let report = std::fs::read_to_string(out.join("S2_spoligotyping.txt")).unwrap();
    assert!(report.lines().nth(1).unwrap().starts_with("S2\t12:12:"));
}

#[test]
fn test_type_threshold_policy() {
    let dir = TempDir::new().unwrap();
    let db = write_database(dir.path());
    // Exactly 4 reads per spacer: absent under "> 4", present under ">= 4"
    let stats = write_stats(dir.path(), "S3", &"1".repeat(43), 4);

    cmd()
        .args(["--format", "tsv", "type"])
        .arg(&stats)
        .arg("--database")
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("spoligo not found, binary all zeros"));

    cmd()
        .args(["--format", "tsv", "type"])
        .arg(&stats)
        .arg("--database")
        .arg(&db)
        .args(["--threshold-policy", "at-least"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SB0145"));
}

#[test]
fn test_type_unify_misses() {
    let dir = TempDir::new().unwrap();
    let db = write_database(dir.path());
    let stats = write_stats(dir.path(), "S4", &"0".repeat(43), 0);

    cmd()
        .args(["--format", "tsv", "type"])
        .arg(&stats)
        .arg("--database")
        .arg(&db)
        .arg("--unify-misses")
        .arg("--no-hex")
        .assert()
        .success()
        .stdout(predicate::str::contains("000000000000000\tNot Found"))
        .stdout(predicate::str::contains("Hexadecimal").not());
}

#[test]
fn test_type_json_multiple_samples() {
    let dir = TempDir::new().unwrap();
    let db = write_database(dir.path());
    let a = write_stats(dir.path(), "A", BCG_BINARY, 30);
    let b = write_stats(dir.path(), "B", "1010101010101010101010101010101010101010101", 30);

    let output = cmd()
        .args(["--format", "json", "type"])
        .arg(&a)
        .arg(&b)
        .arg("--database")
        .arg(&db)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = json.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["sample"], "A");
    assert_eq!(reports[0]["spoligotype"], "SB0120");
    assert_eq!(reports[1]["sample"], "B");
    assert_eq!(reports[1]["spoligotype"], "Not Found");
    assert_eq!(reports[0]["spacer_panel_version"], "1");
}

#[test]
fn test_type_sample_name_requires_single_file() {
    let dir = TempDir::new().unwrap();
    let db = write_database(dir.path());
    let a = write_stats(dir.path(), "A", BCG_BINARY, 30);
    let b = write_stats(dir.path(), "B", BCG_BINARY, 30);

    cmd()
        .arg("type")
        .arg(&a)
        .arg(&b)
        .arg("--database")
        .arg(&db)
        .args(["--sample", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--sample"));
}

#[test]
fn test_type_rejects_sample_name_outside_output_dir() {
    let dir = TempDir::new().unwrap();
    let db = write_database(dir.path());
    let stats = write_stats(dir.path(), "S1", BCG_BINARY, 30);
    let out = dir.path().join("results");

    cmd()
        .arg("type")
        .arg(&stats)
        .arg("--database")
        .arg(&db)
        .arg("--output")
        .arg(&out)
        .args(["--sample", "../escaped"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("../escaped"));

    assert!(!dir.path().join("escaped_spoligotyping.txt").exists());
    assert!(!out.exists());
}

#[test]
fn test_type_rejects_duplicate_sample_names() {
    let dir = TempDir::new().unwrap();
    let db = write_database(dir.path());
    std::fs::create_dir(dir.path().join("a")).unwrap();
    std::fs::create_dir(dir.path().join("b")).unwrap();
    let first = write_stats(&dir.path().join("a"), "S1", BCG_BINARY, 30);
    let second = write_stats(&dir.path().join("b"), "S1", &"1".repeat(43), 30);
    let out = dir.path().join("results");

    cmd()
        .arg("type")
        .arg(&first)
        .arg(&second)
        .arg("--database")
        .arg(&db)
        .arg("--output")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("'S1'"))
        .stderr(predicate::str::contains(first.display().to_string()))
        .stderr(predicate::str::contains(second.display().to_string()));

    assert!(!out.join("S1_spoligotyping.txt").exists());
}

#[test]
fn test_type_rejects_unknown_spacer() {
    let dir = TempDir::new().unwrap();
    let db = write_database(dir.path());
    let stats = dir.path().join("bad_stats.tsv");
    std::fs::write(&stats, "spacer01\t10\nspacer44\t10\n").unwrap();

    cmd()
        .arg("type")
        .arg(&stats)
        .arg("--database")
        .arg(&db)
        .assert()
        .failure()
        .stderr(predicate::str::contains("spacer44"));
}

#[test]
fn test_type_checks_spacer_panel() {
    let dir = TempDir::new().unwrap();
    let db = write_database(dir.path());
    let stats = write_stats(dir.path(), "S1", BCG_BINARY, 40);
    let fasta = dir.path().join("spacers.fasta");
    std::fs::write(&fasta, ">spacer01\nACGT\n>spacer02\nACGT\n").unwrap();

    cmd()
        .arg("type")
        .arg(&stats)
        .arg("--database")
        .arg(&db)
        .arg("--spacers")
        .arg(&fasta)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not match"));
}

#[test]
fn test_encode() {
    cmd()
        .args(["encode", &"1".repeat(43)])
        .assert()
        .success()
        .stdout(predicate::str::contains("777777777777771"))
        .stdout(predicate::str::contains("7F-7F-7F-7F-FF-7F"));
}

#[test]
fn test_encode_with_database() {
    let dir = TempDir::new().unwrap();
    let db = write_database(dir.path());

    cmd()
        .args(["--format", "tsv", "encode", BCG_BINARY, "--database"])
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "676773777777600\t6F-5F-5F-7F-FF-60\tSB0120",
        ));
}

#[test]
fn test_encode_json_identifier() {
    let dir = TempDir::new().unwrap();
    let db = write_database(dir.path());

    let output = cmd()
        .args(["--format", "json", "encode", BCG_BINARY, "--database"])
        .arg(&db)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["identifier"], "SB0120");
    assert_eq!(json["known"], true);

    let zeros = "0".repeat(43);
    let output = cmd()
        .args(["--format", "json", "encode", zeros.as_str(), "--database"])
        .arg(&db)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["identifier"].is_null());
    assert_eq!(json["known"], false);
    assert_eq!(
        json["spoligotype"],
        "spoligo not found, binary all zeros, see spoligo file"
    );
}

#[test]
fn test_encode_rejects_short_code() {
    cmd()
        .args(["encode", "10101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("43"));
}

#[test]
fn test_database_summary_and_lookup() {
    let dir = TempDir::new().unwrap();
    let db = write_database(dir.path());

    cmd()
        .arg("database")
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries: 2"));

    cmd()
        .args(["--format", "tsv", "database"])
        .arg(&db)
        .args(["--id", "SB0120"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "SB0120\t2\t{BCG_BINARY}\t676773777777600\ttrue"
        )));

    cmd()
        .arg("database")
        .arg(&db)
        .args(["--id", "SB9999"])
        .assert()
        .failure();
}
