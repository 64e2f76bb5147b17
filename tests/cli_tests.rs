//! End-to-end tests of the `fastq-validator` binary.
//!
//! Each test writes FASTQ fixtures to a temporary directory, runs the binary
//! and checks the exit status and the stdout/stderr contract: `OK` as the
//! last stdout line on success, exit code 1 and a message on stderr
//! otherwise.

use std::ffi::OsStr;
use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use flate2::write::GzEncoder;
use flate2::Compression;
use predicates::prelude::*;
use tempfile::TempDir;

const SEQ: &str = "ACGTACGTACGTACGTACGTACGTACGTAC";
const QUAL: &str = "IIIIIIIIIIIIIIIIIIIIIIIIIIIIII";

fn records(headers: &[&str]) -> String {
    headers
        .iter()
        .map(|h| format!("{h}\n{SEQ}\n+\n{QUAL}\n"))
        .collect()
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn write_gz(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    std::fs::write(&path, encoder.finish().unwrap()).unwrap();
    path
}

fn validator() -> Command {
    let mut cmd = Command::cargo_bin("fastq-validator").unwrap();
    // Keep the index small; the default allocates ~76 MB of bucket heads
    cmd.args(["--bucket-count", "10007"]);
    cmd
}

fn run<P: AsRef<OsStr>>(paths: &[P]) -> assert_cmd::assert::Assert {
    validator().args(paths).assert()
}

#[test]
fn test_single_file_ok() {
    let dir = TempDir::new().unwrap();
    let f1 = write(&dir, "r1.fq", &records(&["@r1/1", "@r2/1", "@r3/1"]));

    run(&[&f1])
        .success()
        .stdout(predicate::str::contains("Reads processed: 3"))
        .stdout(predicate::str::ends_with("OK\n"));
}

#[test]
fn test_empty_file_ok() {
    let dir = TempDir::new().unwrap();
    let f1 = write(&dir, "empty.fq", "");

    run(&[&f1])
        .success()
        .stdout(predicate::str::contains("Reads processed: 0"))
        .stdout(predicate::str::ends_with("OK\n"));
}

#[test]
fn test_paired_files_ok_in_any_order() {
    let dir = TempDir::new().unwrap();
    let f1 = write(&dir, "r1.fq", &records(&["@a/1", "@b/1", "@c/1"]));
    let f2 = write(&dir, "r2.fq", &records(&["@c/2", "@a/2", "@b/2"]));

    run(&[&f1, &f2])
        .success()
        .stdout(predicate::str::contains("Next file"))
        .stdout(predicate::str::contains("Reads paired: 3"))
        .stdout(predicate::str::ends_with("OK\n"));
}

#[test]
fn test_paired_casava_18_names() {
    let dir = TempDir::new().unwrap();
    let f1 = write(
        &dir,
        "r1.fq",
        &records(&[
            "@EAS139:136:FC706VJ:2:2104:15343:197393 1:Y:18:ATCACG",
            "@EAS139:136:FC706VJ:2:2104:15343:197394 1:N:18:ATCACG",
        ]),
    );
    let f2 = write(
        &dir,
        "r2.fq",
        &records(&[
            "@EAS139:136:FC706VJ:2:2104:15343:197394 2:N:18:ATCACG",
            "@EAS139:136:FC706VJ:2:2104:15343:197393 2:Y:18:ATCACG",
        ]),
    );

    run(&[&f1, &f2]).success().stdout(predicate::str::ends_with("OK\n"));
}

#[test]
fn test_gzip_input() {
    let dir = TempDir::new().unwrap();
    let f1 = write_gz(&dir, "r1.fq.gz", &records(&["@a/1", "@b/1"]));
    let f2 = write(&dir, "r2.fq", &records(&["@b/2", "@a/2"]));

    run(&[&f1, &f2]).success().stdout(predicate::str::ends_with("OK\n"));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let f1 = write(&dir, "r1.fq", &records(&["@a/1"]));
    let missing = dir.path().join("nope.fq");

    run(&[&f1, &missing])
        .code(1)
        .stdout(predicate::str::contains("OK").not())
        .stderr(predicate::str::contains("Unable to open"));
}

#[test]
fn test_missing_file2_fails_before_indexing() {
    let dir = TempDir::new().unwrap();
    let f1 = write(&dir, "r1.fq", &records(&["@a/1"]));
    let missing = dir.path().join("nope.fq");

    run(&[&f1, &missing])
        .code(1)
        .stdout(predicate::str::contains("Reads processed").not());
}

#[test]
fn test_duplicate_read() {
    let dir = TempDir::new().unwrap();
    let f1 = write(&dir, "r1.fq", &records(&["@a/1", "@b/1", "@a/1"]));

    run(&[&f1])
        .code(1)
        .stderr(predicate::str::contains("line 9: duplicated sequence a"));
}

#[test]
fn test_unpaired_read() {
    let dir = TempDir::new().unwrap();
    let f1 = write(&dir, "r1.fq", &records(&["@a/1", "@b/1"]));
    let f2 = write(&dir, "r2.fq", &records(&["@a/2", "@x/2"]));

    run(&[&f1, &f2])
        .code(1)
        .stderr(predicate::str::contains("r2.fq"))
        .stderr(predicate::str::contains("unpaired read - x"));
}

#[test]
fn test_orphaned_read() {
    let dir = TempDir::new().unwrap();
    let f1 = write(&dir, "r1.fq", &records(&["@a/1", "@b/1"]));
    let f2 = write(&dir, "r2.fq", &records(&["@b/2"]));

    run(&[&f1, &f2])
        .code(1)
        .stdout(predicate::str::contains("Reads paired: 1").not())
        .stderr(predicate::str::contains("found 1 unpaired reads from file1"))
        .stderr(predicate::str::contains("a (byte 0)"));
}

#[test]
fn test_truncated_file() {
    let dir = TempDir::new().unwrap();
    let text = format!("{}@b/1\n{SEQ}\n", records(&["@a/1"]));
    let f1 = write(&dir, "r1.fq", &text);

    run(&[&f1])
        .code(1)
        .stderr(predicate::str::contains("line 5: file truncated?"));
}

#[test]
fn test_invalid_sequence_character() {
    let dir = TempDir::new().unwrap();
    let text = "@a/1\nACGTACGTACGTUCGTACGT\n+\nIIIIIIIIIIIIIIIIIIII\n";
    let f1 = write(&dir, "r1.fq", text);

    run(&[&f1])
        .code(1)
        .stderr(predicate::str::contains("line 2: invalid character 'U'"));
}

#[test]
fn test_quality_length_mismatch() {
    let dir = TempDir::new().unwrap();
    let text = "@a/1\nACGTACGTACGTACGTACGT\n+\nIIIIIIIIIIIIIIIIIII\n";
    let f1 = write(&dir, "r1.fq", text);

    run(&[&f1])
        .code(1)
        .stderr(predicate::str::contains("20!=19"));
}

#[test]
fn test_separator_with_description_rejected() {
    // Stricter than FASTQ, which allows the identifier to be repeated after '+'
    let dir = TempDir::new().unwrap();
    let text = "@a/1\nACGTACGTACGTACGTACGT\n+a/1\nIIIIIIIIIIIIIIIIIIII\n";
    let f1 = write(&dir, "r1.fq", text);

    run(&[&f1])
        .code(1)
        .stderr(predicate::str::contains("line 3: separator line"));
}

#[test]
fn test_short_read_and_custom_minimum() {
    let dir = TempDir::new().unwrap();
    let f1 = write(&dir, "r1.fq", "@r1/1\nACGT\n+\n!!!!\n");
    let f2 = write(&dir, "r2.fq", "@r1/2\nACGT\n+\n!!!!\n");

    run(&[&f1, &f2])
        .code(1)
        .stderr(predicate::str::contains("read length too small - 4 < 15"));

    validator()
        .args(["--min-read-length", "4"])
        .args([&f1, &f2])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("OK\n"));
}

#[test]
fn test_line_too_long() {
    let dir = TempDir::new().unwrap();
    let f1 = write(&dir, "r1.fq", &records(&["@a/1"]));

    validator()
        .args(["--max-line-length", "20"])
        .arg(&f1)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("line 2: line longer than 20 bytes"));
}

#[test]
fn test_forced_naming() {
    let dir = TempDir::new().unwrap();
    // Sniffed as legacy, but names only pair when cut at the first space
    let f1 = write(&dir, "r1.fq", &records(&["@read1 first", "@read2 first"]));
    let f2 = write(&dir, "r2.fq", &records(&["@read2 other", "@read1 other"]));

    run(&[&f1, &f2]).code(1);

    validator()
        .args(["--naming", "modern"])
        .args([&f1, &f2])
        .assert()
        .success();
}

#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    let f1 = write(&dir, "r1.fq", &records(&["@a/1", "@b/1"]));
    let f2 = write(&dir, "r2.fq", &records(&["@a/2", "@b/2"]));

    let output = validator()
        .args(["--format", "json"])
        .args([&f1, &f2])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json = stdout.strip_suffix("OK\n").unwrap();
    let report: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(report["file1_records"], 2);
    assert_eq!(report["file2_records"], 2);
    assert_eq!(report["naming_convention"], "legacy");
    assert_eq!(report["bucket_count"], 10007);
}

#[test]
fn test_usage_error() {
    Command::cargo_bin("fastq-validator")
        .unwrap()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_three_files_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let f1 = write(&dir, "r1.fq", &records(&["@a/1"]));

    run(&[&f1, &f1, &f1])
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_exits_zero() {
    Command::cargo_bin("fastq-validator")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}
