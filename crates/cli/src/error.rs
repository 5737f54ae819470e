// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the portico library.
///
/// The first three variants abort the bug command before any output is
/// written. Browser errors are downgraded to a text fallback by
/// [`BugReporter`](crate::report::BugReporter) and only surface when the
/// launcher is used directly.
#[derive(Debug, Error)]
pub enum Error {
    #[error("version information unavailable: {0}")]
    VersionUnavailable(String),

    #[error("failed to serialize configuration: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("malformed report template: {0}")]
    Template(String),

    #[error("unsupported platform '{0}'\n  hint: supported platforms are: linux, windows, macos")]
    UnsupportedPlatform(String),

    #[error("failed to launch '{program}': {source}")]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for portico operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
