use assert_cmd::cargo_bin;
use std::process::Command;
use tempfile::NamedTempFile;

mod common;

#[test]
fn test_large_file_streaming() {
    let file = NamedTempFile::new().unwrap();
    common::generate_large_csv(file.path(), 5).expect("Failed to generate large CSV");

    let output = Command::new(cargo_bin!("keycalc"))
        .arg(file.path())
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "Binary failed to process 5MB file");

    let stdout = String::from_utf8_lossy(&output.stdout);
    // Header + 50 sessions
    assert_eq!(stdout.lines().count(), 51);
}

#[test]
fn test_random_stream_never_fails() {
    let file = NamedTempFile::new().unwrap();
    common::generate_csv(file.path(), 20, 20_000).expect("Failed to generate CSV");

    let output = Command::new(cargo_bin!("keycalc"))
        .arg(file.path())
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "no row should be rejected");
}
