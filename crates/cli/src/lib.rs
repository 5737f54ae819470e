// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! portico - command-line front of the Portico reverse proxy.
//!
//! This crate carries the diagnostic commands of the `portico` binary.
//!
//! # Main Components
//!
//! - [`Config`] - Static proxy configuration loaded from TOML
//! - [`version`] - Version information of the running binary
//! - [`report`] - Bug report rendering and delivery ([`BugReporter`])
//! - [`browser`] - Fire-and-forget browser launching per platform
//! - [`Error`] - Error types for all operations
//!
//! # Reporting a bug
//!
//! ```rust,ignore
//! use portico::{BugReporter, Config, SystemBrowser};
//!
//! let config = Config::discover(None)?;
//! let mut reporter = BugReporter::new(SystemBrowser::default(), std::io::stdout());
//! let report = reporter.execute(|| Ok("v1.7.0".to_string()), || &config)?;
//! println!("opened: {}", report.opened);
//! ```

pub mod browser;
mod cli;
pub mod colors;
mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod help;
pub mod logging;
pub mod report;
pub mod version;

pub use browser::{BrowserLauncher, Platform, SystemBrowser};
pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{Error, Result};
pub use report::{BugReport, BugReporter};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Bug => commands::bug::run(cli.config_file.as_deref()),
        Command::Version => commands::version::run(),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "portico", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
