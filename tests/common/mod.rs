#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn snipbox_cmd() -> Command {
    let mut cmd = Command::cargo_bin("snipbox").unwrap();
    cmd.env_remove("SNIPBOX_ROOT");
    cmd.env_remove("SNIPBOX_LOG");
    cmd
}

/// Initialize a snippet box in `dir`
pub fn init_box(dir: &Path) {
    snipbox_cmd().arg("init").arg(dir).assert().success();
}

/// Save a snippet through the CLI from inside `dir`
pub fn save(dir: &Path, text: &str, category: &str, url: &str) {
    snipbox_cmd()
        .current_dir(dir)
        .args(["save", text, "--category", category, "--url", url])
        .assert()
        .success();
}
