// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const TRACKER_URL: &str = "https://github.com/portico-proxy/portico/issues/new";

/// A `portico` command isolated from the caller's environment.
///
/// Runs in `dir`, with the user config directory pointed inside it and the
/// browser launcher forced onto an unsupported platform so no browser opens.
pub fn portico(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("portico");
    cmd.current_dir(dir.path())
        .env_remove("PORTICO_CONFIG_FILE")
        .env_remove("PORTICO_LOG")
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env("PORTICO_PLATFORM", "plan9")
        .env("NO_COLOR", "1");
    cmd
}

/// Writes `content` to `name` inside `dir` and returns the full path.
pub fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}
