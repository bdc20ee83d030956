//! # dirkit CLI Scaffold Integration Tests
//!
//! File: cli/tests/scaffold.rs
//!
//! ## Overview
//!
//! Runs `dirkit scaffold` inside temporary directories and checks the files
//! on disk and the progress report, including the idempotent second run.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use walkdir::WalkDir;

/// Folders and files in the built-in skeleton.
const EXPECTED_FOLDERS: usize = 7;
const EXPECTED_FILES: usize = 12;

/// Counts (folders, files) below `base`, excluding `base` itself.
fn count_entries(base: &Path) -> (usize, usize) {
    WalkDir::new(base)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .fold((0, 0), |(dirs, files), entry| {
            if entry.file_type().is_dir() {
                (dirs + 1, files)
            } else {
                (dirs, files + 1)
            }
        })
}

/// Relative path, size pairs of everything below `base`, in walk order.
fn snapshot(base: &Path) -> Vec<(String, u64)> {
    WalkDir::new(base)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| {
            let rel = entry
                .path()
                .strip_prefix(base)
                .unwrap()
                .to_string_lossy()
                .into_owned();
            let len = entry.metadata().map(|m| m.len()).unwrap_or(0);
            (rel, len)
        })
        .collect()
}

#[test]
fn test_scaffold_creates_skeleton() {
    let work_dir = tempdir().expect("Failed to create temp dir");

    let output = dirkit_cmd()
        .arg("scaffold")
        .current_dir(work_dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Creating project structure in:")
                .and(predicate::str::contains("✓ Created folder:"))
                .and(predicate::str::contains("✓ Project structure creation complete!")),
        )
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.matches("✓ Created folder: ").count(), EXPECTED_FOLDERS);
    assert_eq!(stdout.matches("✓ Created file: ").count(), EXPECTED_FILES);

    assert_eq!(
        count_entries(work_dir.path()),
        (EXPECTED_FOLDERS, EXPECTED_FILES)
    );
    let header = work_dir.path().join("src/components/Header.tsx");
    assert_eq!(fs::metadata(header).unwrap().len(), 0);
}

#[test]
fn test_scaffold_is_idempotent() {
    let work_dir = tempdir().expect("Failed to create temp dir");
    dirkit_cmd()
        .arg("scaffold")
        .current_dir(work_dir.path())
        .assert()
        .success();
    fs::write(
        work_dir.path().join("src/utils/helpers.ts"),
        "export const noop = () => {};",
    )
    .unwrap();
    let before = snapshot(work_dir.path());

    let output = dirkit_cmd()
        .arg("scaffold")
        .current_dir(work_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Created").not())
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(
        stdout.matches("- Folder already exists: ").count(),
        EXPECTED_FOLDERS
    );
    assert_eq!(
        stdout.matches("- File already exists: ").count(),
        EXPECTED_FILES
    );
    assert_eq!(snapshot(work_dir.path()), before);
}

#[test]
fn test_scaffold_fails_when_file_blocks_folder() {
    let work_dir = tempdir().expect("Failed to create temp dir");
    fs::write(work_dir.path().join("src"), "occupied").unwrap();

    dirkit_cmd()
        .arg("scaffold")
        .current_dir(work_dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a directory"));
}
