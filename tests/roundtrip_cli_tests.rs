// End-to-end checks for the fdtrip binary: the stdout contract of the
// round trip and the on-disk post-conditions.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test the full success scenario: confirmation lines, record contents,
/// deletion message, and the file gone afterwards
#[test]
fn test_successful_run_prints_contract_and_removes_file() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("fdtrip").unwrap();
    cmd.current_dir(dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "File created and data written successfully.",
        ))
        .stdout(predicate::str::contains(
            "Student Number: 00611723\nName: Andrew McCord\nCourse: Operating Systems\n",
        ))
        .stdout(predicate::str::contains(
            "File 'student_info.txt' deleted successfully.",
        ));

    assert!(
        !dir.path().join("student_info.txt").exists(),
        "target file should be unlinked after a successful run"
    );
}

/// Test the failure path: an unusable target is reported on stderr and
/// the process still exits normally
#[test]
fn test_unusable_target_reports_error_and_exits_normally() {
    let dir = tempfile::tempdir().unwrap();

    // Occupy the target path with a directory so O_CREAT|O_WRONLY fails
    // with EISDIR regardless of privileges.
    std::fs::create_dir(dir.path().join("student_info.txt")).unwrap();

    let mut cmd = Command::cargo_bin("fdtrip").unwrap();
    cmd.current_dir(dir.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error occurred:"))
        .stdout(predicate::str::contains("File created").not());
}

/// Test that --debug routes syscall-level diagnostics to stderr without
/// touching the stdout contract
#[test]
fn test_debug_flag_emits_tracing_to_stderr() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("fdtrip").unwrap();
    cmd.current_dir(dir.path()).arg("--debug");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("write leg complete"))
        .stderr(predicate::str::contains("read leg complete"))
        .stdout(predicate::str::contains(
            "File 'student_info.txt' deleted successfully.",
        ));
}
