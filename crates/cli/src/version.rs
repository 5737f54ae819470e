// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build and runtime version information.

use std::io::Write;

use crate::error::Result;

/// Release codename, bumped together with the minor version.
pub const CODENAME: &str = "cantal";

/// Version details reported by `portico version` and embedded in bug reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: &'static str,
    pub codename: &'static str,
    pub os: &'static str,
    pub arch: &'static str,
}

impl VersionInfo {
    /// Version information for the running binary.
    pub fn current() -> Self {
        VersionInfo {
            version: env!("CARGO_PKG_VERSION"),
            codename: CODENAME,
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }

    /// Writes the version block to `out`.
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Version:      {}", self.version)?;
        writeln!(out, "Codename:     {}", self.codename)?;
        writeln!(out, "OS/Arch:      {}/{}", self.os, self.arch)?;
        Ok(())
    }
}

/// Writes the current version block to `out`.
pub fn write_version(out: &mut impl Write) -> Result<()> {
    VersionInfo::current().write_to(out)
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
