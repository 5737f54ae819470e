// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::browser::SystemBrowser;
use crate::config::Config;
use crate::error::Result;
use crate::report::BugReporter;
use crate::version::write_version;

/// Report an issue using the running version and the active configuration.
pub fn run(config_file: Option<&Path>) -> Result<()> {
    let config = Config::discover(config_file)?;
    let stdout = std::io::stdout();
    let mut reporter = BugReporter::new(SystemBrowser::default(), stdout.lock());
    reporter.execute(version_text, || &config)?;
    Ok(())
}

/// Renders the version block into a string.
pub(crate) fn version_text() -> Result<String> {
    let mut buf = Vec::new();
    write_version(&mut buf)?;
    let text = String::from_utf8_lossy(&buf);
    Ok(text.trim_end().to_string())
}

#[cfg(test)]
#[path = "bug_tests.rs"]
mod tests;
