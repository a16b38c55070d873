//! Integration tests for the export command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_box, save, snipbox_cmd};

#[test]
fn test_export_empty_box_refused() {
    let temp = TempDir::new().unwrap();
    init_box(temp.path());

    snipbox_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No snippets to export"));

    assert!(!temp.path().join("snippets.txt").exists());
}

#[test]
fn test_export_writes_snippets_txt() {
    let temp = TempDir::new().unwrap();
    init_box(temp.path());
    save(temp.path(), "A", "C", "U");
    save(temp.path(), "B", "D", "V");

    snipbox_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported snippets to"));

    let content = fs::read_to_string(temp.path().join("snippets.txt")).unwrap();
    let expected = format!(
        "Text: A\nCategory: C\nURL: U\n\n{}\nText: B\nCategory: D\nURL: V\n\n",
        "-".repeat(50)
    );
    assert_eq!(content, expected);
}

#[test]
fn test_export_to_output_dir() {
    let temp = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    init_box(temp.path());
    save(temp.path(), "A", "C", "U");

    snipbox_cmd()
        .current_dir(temp.path())
        .arg("export")
        .arg("--output")
        .arg(out.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(out.path().join("snippets.txt")).unwrap(),
        "Text: A\nCategory: C\nURL: U\n\n"
    );
}

#[test]
fn test_export_stdout() {
    let temp = TempDir::new().unwrap();
    init_box(temp.path());
    save(temp.path(), "A", "C", "U");

    snipbox_cmd()
        .current_dir(temp.path())
        .args(["export", "--stdout"])
        .assert()
        .success()
        .stdout("Text: A\nCategory: C\nURL: U\n\n");
}

#[test]
fn test_export_uses_configured_filename() {
    let temp = TempDir::new().unwrap();
    init_box(temp.path());
    save(temp.path(), "A", "C", "U");

    snipbox_cmd()
        .current_dir(temp.path())
        .args(["config", "export_filename", "clips.txt"])
        .assert()
        .success();

    snipbox_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success();

    assert!(temp.path().join("clips.txt").exists());
    assert!(!temp.path().join("snippets.txt").exists());
}
