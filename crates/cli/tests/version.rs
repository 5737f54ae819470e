// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

mod common;
use common::*;

#[test]
fn version_command_prints_details() {
    let temp = TempDir::new().unwrap();
    portico(&temp)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "Version:      {}\n",
            env!("CARGO_PKG_VERSION")
        )))
        .stdout(predicate::str::contains("Codename:"))
        .stdout(predicate::str::contains(format!(
            "OS/Arch:      {}/{}",
            std::env::consts::OS,
            std::env::consts::ARCH
        )));
}

#[test]
fn version_flag_outputs_version() {
    let temp = TempDir::new().unwrap();
    for flag in ["--version", "-v"] {
        portico(&temp)
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("portico"))
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn help_lists_commands() {
    let temp = TempDir::new().unwrap();
    portico(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bug"))
        .stdout(predicate::str::contains("version"))
        .stdout(predicate::str::contains("--config-file"));
}

#[test]
fn completion_generates_script() {
    let temp = TempDir::new().unwrap();
    portico(&temp)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("portico"));
}
