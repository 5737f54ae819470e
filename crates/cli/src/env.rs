// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by portico are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `PORTICO_CONFIG_FILE` if set and non-empty.
pub fn config_file() -> Option<PathBuf> {
    std::env::var(vars::PORTICO_CONFIG_FILE)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Returns the OS identifier override from `PORTICO_PLATFORM`, if set.
pub fn platform_override() -> Option<String> {
    std::env::var(vars::PORTICO_PLATFORM)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Returns the tracing filter directives from `PORTICO_LOG`, if set.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::PORTICO_LOG).ok()
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

/// Returns the user configuration base directory.
///
/// Prefers `XDG_CONFIG_HOME`, falling back to the platform default.
pub fn config_home() -> Option<PathBuf> {
    std::env::var(vars::XDG_CONFIG_HOME)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
