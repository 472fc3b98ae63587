use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn create_files(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), name.as_bytes()).unwrap();
    }
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

fn prorename() -> Command {
    let mut cmd = Command::cargo_bin("prorename").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("PRORENAME_LANG")
        .env_remove("PRORENAME_PAGE_SIZE");
    cmd
}

#[test]
fn test_help_flag() {
    prorename()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Batch rename files"));
}

#[test]
fn test_version_flag() {
    prorename()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_sources() {
    prorename()
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_dry_flag_no_filesystem_changes() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["a.txt", "b.jpg"]);

    prorename()
        .args(["--dry", "-t", "_1", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"))
        .stdout(predicate::str::contains("a_1.txt"))
        .stdout(predicate::str::contains("2 files would be renamed"));

    assert_eq!(file_names(dir.path()), vec!["a.txt", "b.jpg"]);
}

#[test]
fn test_suffix_rename_with_yes() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["a.b.txt", "noext"]);

    prorename()
        .args(["--yes", "--text", "_1", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed 2 files"));

    assert_eq!(file_names(dir.path()), vec!["a.b_1.txt", "noext_1"]);
}

#[test]
fn test_prefix_rename_only_filtered_extension() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["a.txt", "b.TXT", "c.jpg"]);

    prorename()
        .args([
            "-y",
            "-m",
            "prefix",
            "-t",
            "x_",
            "-e",
            "txt",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    assert_eq!(file_names(dir.path()), vec!["c.jpg", "x_a.txt", "x_b.TXT"]);
}

#[test]
fn test_replace_mode_on_selected_files() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["IMG_001.png", "IMG_002.png", "keep.png"]);
    let first = dir.path().join("IMG_001.png");
    let second = dir.path().join("keep.png");

    prorename()
        .args([
            "-y",
            "-m",
            "replace",
            "-f",
            "IMG",
            "-r",
            "Trip",
            first.to_str().unwrap(),
            second.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 files already had the target name"));

    assert_eq!(
        file_names(dir.path()),
        vec!["IMG_002.png", "Trip_001.png", "keep.png"]
    );
}

#[test]
fn test_confirmation_declined() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["a.txt"]);

    prorename()
        .args(["-t", "_1", dir.path().to_str().unwrap()])
        .write_stdin("n\n")
        .assert()
        .code(6) // ExitCode::Cancelled
        .stderr(predicate::str::contains("No files were renamed"));

    assert_eq!(file_names(dir.path()), vec!["a.txt"]);
}

#[test]
fn test_confirmation_accepted() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["a.txt"]);

    prorename()
        .args(["-t", "_1", dir.path().to_str().unwrap()])
        .write_stdin("y\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("[y/N]"));

    assert_eq!(file_names(dir.path()), vec!["a_1.txt"]);
}

#[test]
fn test_partial_failure_continues_and_reports() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["a.txt", "a_1.txt"]);

    prorename()
        .args(["-y", "-t", "_1", dir.path().to_str().unwrap()])
        .assert()
        .code(5) // ExitCode::RenameError
        .stderr(predicate::str::contains("1 of 2 files could not be renamed"))
        .stderr(predicate::str::contains("destination already exists"));

    assert_eq!(file_names(dir.path()), vec!["a.txt", "a_1_1.txt"]);
}

#[test]
fn test_json_report() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["a.txt", "b.txt"]);

    let output = prorename()
        .args(["-y", "--json", "-t", "_v2", dir.path().to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 2);
    assert_eq!(report["processed"], 2);
    assert_eq!(report["renamed"][0]["to"], "a_v2.txt");
}

#[test]
fn test_pagination_display() {
    let dir = tempdir().unwrap();
    let names: Vec<String> = (0..25).map(|i| format!("file{:02}.txt", i)).collect();
    let refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
    create_files(dir.path(), &refs);

    prorename()
        .args(["--dry", "--page", "3", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 3 / 3"))
        .stdout(predicate::str::contains("file24.txt"))
        .stdout(predicate::str::contains("Total: 25 | Filtered: 25"));
}

#[test]
fn test_chinese_locale() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["a.txt"]);

    prorename()
        .args(["--dry", "--lang", "zh", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("原文件名"))
        .stdout(predicate::str::contains("总文件数: 1"));
}

#[test]
fn test_nonexistent_source() {
    prorename()
        .arg("/nonexistent/path")
        .assert()
        .code(3) // ExitCode::SourceNotFound
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_invalid_page_size_from_env() {
    let dir = tempdir().unwrap();

    prorename()
        .env("PRORENAME_PAGE_SIZE", "0")
        .args(["--dry", dir.path().to_str().unwrap()])
        .assert()
        .code(2) // ExitCode::InvalidArguments
        .stderr(predicate::str::contains("PRORENAME_PAGE_SIZE"));
}

#[test]
fn test_empty_directory_is_not_an_error() {
    let dir = tempdir().unwrap();

    prorename()
        .args(["-y", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("No files to rename"));
}

#[test]
fn test_interactive_session() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["a.txt", "b.md"]);

    let script = format!(
        "import {}\next .txt\nsuffix _x\nrun\ny\nquit\n",
        dir.path().display()
    );

    prorename()
        .arg("--interactive")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 2 | Filtered: 1"))
        .stdout(predicate::str::contains("[1/1 100%] a.txt -> a_x.txt"));

    assert_eq!(file_names(dir.path()), vec!["a_x.txt", "b.md"]);
}
