use std::fs;

use assert_cmd::Command;
use image::{GenericImageView, ImageBuffer, Rgb};
use predicates::str::contains;
use tempfile::tempdir;

fn cmd() -> Command {
    Command::cargo_bin("docprep").unwrap()
}

#[test]
fn split_reports_output_dir() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("INSolver.md");
    fs::write(&input, "# Introduction\nhello\n# Conclusion\nbye\n").unwrap();
    let out = dir.path().join("sections");

    cmd()
        .arg("split")
        .arg("--input")
        .arg(&input)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("All sections split and saved in"));

    assert!(out.join("introduction.md").is_file());
    assert!(out.join("conclusion.md").is_file());
    assert!(!out.join("results.md").exists());
}

#[test]
fn split_json_report() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "# Results\nx\n").unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["--json", "split", "-i", "doc.md", "-o", "out"])
        .assert()
        .success()
        .stdout(contains("\"heading\": \"# Results\""));
}

#[test]
fn split_missing_input_fails() {
    let dir = tempdir().unwrap();
    cmd()
        .current_dir(dir.path())
        .arg("split")
        .assert()
        .failure()
        .stderr(contains("NotFound"));
}

#[test]
fn resize_corrupt_input_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("corrupt.png"), b"\x89PNG\r\n\x1a\ngarbage").unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["resize", "--input", "corrupt.png"])
        .assert()
        .failure()
        .stderr(contains("Decode"));

    assert!(!dir.path().join("corrupt_small.png").exists());
}

#[test]
fn resize_defaults_to_small_suffix() {
    let dir = tempdir().unwrap();
    ImageBuffer::from_pixel(800, 500, Rgb([9u8, 9, 9]))
        .save(dir.path().join("Divergence_CavityFlow.png"))
        .unwrap();

    cmd()
        .current_dir(dir.path())
        .arg("resize")
        .assert()
        .success()
        .stdout(contains("400x250"));

    let out = image::open(dir.path().join("Divergence_CavityFlow_small.png")).unwrap();
    assert_eq!(out.dimensions(), (400, 250));
}

#[test]
fn resize_rejects_zero_width() {
    cmd()
        .args(["resize", "--max-width", "0"])
        .assert()
        .failure();
}
