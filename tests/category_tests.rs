//! Integration tests for the categories command

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{init_box, save, snipbox_cmd};

#[test]
fn test_no_categories() {
    let temp = TempDir::new().unwrap();
    init_box(temp.path());

    snipbox_cmd()
        .current_dir(temp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("No categories found"));
}

#[test]
fn test_add_category_twice() {
    let temp = TempDir::new().unwrap();
    init_box(temp.path());

    snipbox_cmd()
        .current_dir(temp.path())
        .args(["categories", "add", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added category 'work'"));

    snipbox_cmd()
        .current_dir(temp.path())
        .args(["categories", "add", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    snipbox_cmd()
        .current_dir(temp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout("work\n");
}

#[test]
fn test_saving_registers_categories_in_first_use_order() {
    let temp = TempDir::new().unwrap();
    init_box(temp.path());
    save(temp.path(), "a", "zeta", "");
    save(temp.path(), "b", "alpha", "");
    save(temp.path(), "c", "zeta", "");

    snipbox_cmd()
        .current_dir(temp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout("zeta\nalpha\n");
}

#[test]
fn test_add_empty_category_is_noop() {
    let temp = TempDir::new().unwrap();
    init_box(temp.path());
    save(temp.path(), "a", "work", "");

    snipbox_cmd()
        .current_dir(temp.path())
        .args(["categories", "add", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing added"));

    snipbox_cmd()
        .current_dir(temp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout("work\n");
}
